use backtrace::Backtrace;

use std::fmt;
use std::io;

#[derive(Debug)]
enum ErrorKind {
    Io(io::Error),
    Str(String),
    StaticStr(&'static str),
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    backtrace: Backtrace,
}

impl Error {
    fn new(k: ErrorKind) -> Self {
        Self {
            kind: k,
            backtrace: Backtrace::new(),
        }
    }

    /// Prefixes the message with `ctx`, keeping the original io error kind.
    pub fn context<T: fmt::Display>(self, ctx: T) -> Self {
        let kind = match self.kind {
            ErrorKind::Io(e) => {
                ErrorKind::Io(io::Error::new(e.kind(), format!("{}: {}", ctx, e)))
            }
            ErrorKind::Str(s) => ErrorKind::Str(format!("{}: {}", ctx, s)),
            ErrorKind::StaticStr(s) => ErrorKind::Str(format!("{}: {}", ctx, s)),
        };
        Self {
            kind,
            backtrace: self.backtrace,
        }
    }

    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match &self.kind {
            ErrorKind::Io(e) => Some(e.kind()),
            _ => None,
        }
    }

    pub fn call_stack(&self) -> String {
        format!("{:?}", self.backtrace)
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            ErrorKind::Io(e) => write!(f, "{}", e),
            ErrorKind::Str(s) => write!(f, "{}", s),
            ErrorKind::StaticStr(s) => write!(f, "{}", s),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::new(ErrorKind::Io(err))
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::new(ErrorKind::Str(s))
    }
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error::new(ErrorKind::StaticStr(s))
    }
}
