use crate::{Error, Result};

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Represents the set of parameters to use to spawn a process.
#[derive(Clone, Debug)]
pub struct ProcessInfo {
    app: PathBuf,
    args: Vec<String>,
}

/// A process that has been started and then let go.
///
/// Nothing is kept but the pid: the child is never waited on, killed or
/// talked to, and it may outlive the process that spawned it.
#[derive(Copy, Clone, Debug)]
pub struct Detached {
    pid: u32,
}

impl ProcessInfo {
    pub fn new<P: AsRef<Path>>(app: P) -> Self {
        Self {
            app: app.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Describes a new instance of the running executable.
    pub fn current_exe() -> Result<Self> {
        env::current_exe()
            .map(Self::new)
            .map_err(|e| Error::from(e).context("Unable to locate current executable"))
    }

    pub fn args<T, U>(&mut self, args: T) -> &mut Self
    where
        T: IntoIterator<Item = U>,
        U: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    pub fn app(&self) -> &Path {
        &self.app
    }

    pub fn argv(&self) -> &[String] {
        &self.args
    }
}

impl AsRef<ProcessInfo> for ProcessInfo {
    fn as_ref(&self) -> &ProcessInfo {
        self
    }
}

impl Detached {
    pub fn pid(&self) -> u32 {
        self.pid
    }
}

/// Starts a process and returns without waiting for it.
///
/// Standard streams and environment are inherited. No pipes are created and
/// the exit status of the child is never collected.
pub fn spawn_detached<T: AsRef<ProcessInfo>>(info: T) -> Result<Detached> {
    let info = info.as_ref();
    let mut cmd = Command::new(&info.app);
    cmd.args(&info.args);

    let child = cmd.spawn().map_err(|e| {
        Error::from(e).context(format!("Unable to spawn '{}'", info.app.display()))
    })?;
    let detached = Detached { pid: child.id() };
    debug!(
        "spawned '{}' {:?} with pid {}",
        info.app.display(),
        info.args,
        detached.pid
    );

    // Dropping `Child` neither waits for nor kills the process.
    drop(child);
    Ok(detached)
}
