use crate::role::PROBE_SENTINEL;

use fork_probe::process::{spawn_detached, Detached, ProcessInfo};
use fork_probe::Result;

use std::io::Write;

pub struct Launcher {
    info: ProcessInfo,
}

impl Launcher {
    /// A launcher that starts the running executable as a probe.
    pub fn new() -> Result<Self> {
        ProcessInfo::current_exe().map(Self::with_info)
    }

    /// A launcher that starts `info` with the probe sentinel appended to its arguments.
    pub fn with_info(mut info: ProcessInfo) -> Self {
        info.args(&[PROBE_SENTINEL]);
        Self { info }
    }

    pub fn info(&self) -> &ProcessInfo {
        &self.info
    }

    /// Spawns the probe and returns without waiting for it.
    ///
    /// The caller is expected to exit right after; the probe is never observed.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Detached> {
        writeln!(out, "I'm parent. spawning")?;
        out.flush()?;

        let child = spawn_detached(&self.info)?;
        info!("launched probe with pid {}", child.pid());

        writeln!(out, "exit")?;
        out.flush()?;
        Ok(child)
    }
}
