use crate::{Error, Result};

use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;

use std::io;
use std::os::unix::io::RawFd;
use std::path::Path;

pub type RawDescriptor = RawFd;

pub fn open_read_only(path: &Path) -> Result<RawDescriptor> {
    open(path, OFlag::O_RDONLY | OFlag::O_CLOEXEC, Mode::empty()).map_err(Error::from)
}

impl From<nix::Error> for Error {
    fn from(e: nix::Error) -> Error {
        Error::from(io::Error::from_raw_os_error(e as i32))
    }
}
