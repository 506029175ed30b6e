extern crate backtrace;
extern crate cfg_if;
#[macro_use]
extern crate log;
#[cfg(unix)]
extern crate nix;

pub mod fs;
pub mod process;
pub mod timer;

mod error;
mod sys;

pub use error::*;

pub type Result<T> = std::result::Result<T, self::Error>;
