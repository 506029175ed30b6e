/// The argument value that turns a process into a probe.
pub const PROBE_SENTINEL: &str = "child";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// Spawns a probe and exits without waiting for it.
    Launcher,
    /// Opens the probe file after a delay and prints its descriptor.
    Probe,
}

impl Role {
    /// Picks the role from a full argument vector, program path included.
    ///
    /// Only the first argument after the program path is inspected.
    pub fn from_argv<T, U>(argv: T) -> Self
    where
        T: IntoIterator<Item = U>,
        U: AsRef<str>,
    {
        match argv.into_iter().nth(1) {
            Some(ref arg) if arg.as_ref() == PROBE_SENTINEL => Role::Probe,
            _ => Role::Launcher,
        }
    }
}
