use crate::sys as imp;
use crate::Result;

use std::fmt;
use std::path::Path;

pub use crate::sys::RawDescriptor;

/// An OS-assigned descriptor of a file opened for reading.
///
/// Dropping a `Descriptor` does not close it. The descriptor stays open until
/// the process exits and the OS reclaims it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Descriptor(RawDescriptor);

impl Descriptor {
    pub fn raw(&self) -> RawDescriptor {
        self.0
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opens `path` read-only. Relative paths are resolved against the current
/// working directory at the time of the call.
pub fn open_descriptor<P: AsRef<Path>>(path: P) -> Result<Descriptor> {
    let path = path.as_ref();
    let raw = imp::open_read_only(path)
        .map_err(|e| e.context(format!("Unable to open '{}'", path.display())))?;
    debug!("opened '{}' as descriptor {}", path.display(), raw);
    Ok(Descriptor(raw))
}
