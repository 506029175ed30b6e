extern crate fork_probe;
#[macro_use]
extern crate log;

mod config;
mod launcher;
mod probe;
mod role;


pub use crate::config::*;
pub use crate::launcher::Launcher;
pub use crate::probe::{Probe, State};
pub use crate::role::{Role, PROBE_SENTINEL};

use fork_probe::Result;

use std::io;

/// What a finished role leaves behind.
#[derive(Debug)]
pub enum Outcome {
    /// A probe was launched and is running on its own.
    Launched(fork_probe::process::Detached),
    /// The probe read its file, `None` if the read was cancelled.
    Probed(Option<fork_probe::fs::Descriptor>),
}

/// Runs the role selected by `argv` (program path included), printing to stdout.
pub fn run<T, U>(argv: T) -> Result<Outcome>
where
    T: IntoIterator<Item = U>,
    U: AsRef<str>,
{
    let role = Role::from_argv(argv);
    debug!("running as {:?}", role);
    let mut out = io::stdout();
    match role {
        Role::Launcher => run_launcher(&mut out),
        // Only a probe reads the environment, a launcher never fails on it.
        Role::Probe => run_probe(&Config::from_env()?, &mut out),
    }
}

pub fn run_launcher<W: io::Write>(out: &mut W) -> Result<Outcome> {
    Launcher::new()?.run(out).map(Outcome::Launched)
}

pub fn run_probe<W: io::Write>(cfg: &Config, out: &mut W) -> Result<Outcome> {
    debug!("probing with {:?}", cfg);
    Probe::new(cfg).run(out).map(Outcome::Probed)
}
