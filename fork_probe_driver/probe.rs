use crate::config::Config;

use fork_probe::fs::{open_descriptor, Descriptor};
use fork_probe::timer::{CancelHandle, Timer};
use fork_probe::{Error, Result};

use std::io::Write;
use std::path::PathBuf;

type ReadTask = Box<dyn FnOnce() -> Result<Descriptor>>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// The read is scheduled but has not happened yet.
    Waiting,
    /// The open has been attempted, successfully or not.
    Done,
}

pub struct Probe {
    file: PathBuf,
    timer: Option<Timer<ReadTask>>,
}

impl Probe {
    pub fn new(cfg: &Config) -> Self {
        let file = cfg.file.clone();
        let task: ReadTask = Box::new(move || open_descriptor(file));
        Self {
            file: cfg.file.clone(),
            timer: Some(Timer::once(cfg.delay, task)),
        }
    }

    pub fn state(&self) -> State {
        match self.timer {
            Some(_) => State::Waiting,
            None => State::Done,
        }
    }

    /// Handle for cancelling the pending read. `None` once the probe has run.
    pub fn cancel_handle(&self) -> Option<CancelHandle> {
        self.timer.as_ref().map(|t| t.cancel_handle())
    }

    /// Announces the read, waits for the delay, then opens the file and prints its descriptor.
    ///
    /// Returns `Ok(None)` only if the read was cancelled. An open failure is returned as
    /// an error and nothing is printed for it.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Option<Descriptor>> {
        let timer = self
            .timer
            .take()
            .ok_or_else(|| Error::from("Probe has already run"))?;

        writeln!(out, "child, reading files")?;
        out.flush()?;

        debug!("reading '{}' in {:?}", self.file.display(), timer.delay());
        match timer.run() {
            Some(result) => {
                let fd = result?;
                writeln!(out, "fd: {}", fd)?;
                out.flush()?;
                Ok(Some(fd))
            }
            None => Ok(None),
        }
    }
}
