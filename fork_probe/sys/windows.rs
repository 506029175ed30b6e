use crate::Result;

use std::fs::File;
use std::os::windows::io::IntoRawHandle;
use std::path::Path;

/// Raw handle value, the closest windows counterpart of a file descriptor.
pub type RawDescriptor = usize;

pub fn open_read_only(path: &Path) -> Result<RawDescriptor> {
    // Never closed here, the OS reclaims it at exit.
    let handle = File::open(path)?.into_raw_handle();
    Ok(handle as usize)
}
