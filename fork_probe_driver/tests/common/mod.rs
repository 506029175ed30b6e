use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

use std::env;
use std::fs;
use std::iter;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::thread;
use std::time::{Duration, Instant};

pub const FORK_PROBE: &str = env!("CARGO_BIN_EXE_fork_probe");

pub const PROBE_DELAY: Duration = Duration::from_millis(200);
pub const TIME_ERR: Duration = Duration::from_millis(200); // covers process startup

macro_rules! assert_approx_eq {
    ($a:expr, $b:expr, $diff:expr) => {{
        match (&$a, &$b, &$diff) {
            (a_val, b_val, diff_val) => {
                if (*a_val < (*b_val - *diff_val)) || (*a_val > (*b_val + *diff_val)) {
                    panic!(
                        "assertion failed: |a - b| < diff \
                         a: `{:?}`, b: `{:?}`, diff: `{:?}`",
                        a_val, b_val, diff_val
                    )
                }
            }
        }
    }};
}

pub struct TmpDir {
    dir: PathBuf,
}

pub struct Run {
    pub output: Output,
    pub elapsed: Duration,
}

impl TmpDir {
    pub fn new() -> Self {
        let mut rng = thread_rng();
        let name: String = iter::repeat(())
            .map(|()| rng.sample(Alphanumeric))
            .take(7)
            .collect();

        let dir = env::temp_dir().join(format!("fork_probe_{}", name));
        fs::create_dir(dir.as_path()).unwrap();

        Self {
            dir: dir.canonicalize().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn touch<P: AsRef<Path>>(&self, filename: P) {
        fs::write(self.dir.join(filename), "").unwrap();
    }
}

impl Drop for TmpDir {
    fn drop(&mut self) {
        // A detached probe might still be using the directory.
        for _ in 0..5000 {
            match fs::remove_dir_all(self.dir.as_path()) {
                Err(_) => thread::sleep(Duration::from_millis(1)),
                Ok(_) => break,
            }
        }
    }
}

/// A command for the binary with a clean environment for its own variables.
pub fn fork_probe(dir: &TmpDir) -> Command {
    let mut cmd = Command::new(FORK_PROBE);
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("FORK_PROBE_DELAY")
        .env_remove("FORK_PROBE_FILE");
    cmd
}

/// Runs `cmd` until it and every process sharing its stdout and stderr are gone.
pub fn run(cmd: &mut Command) -> Run {
    let start = Instant::now();
    let output = cmd.output().unwrap();
    Run {
        output,
        elapsed: start.elapsed(),
    }
}

impl Run {
    pub fn stdout_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.output.stdout)
            .lines()
            .map(String::from)
            .collect()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }
}

/// Returns the descriptor from an `fd: <value>` line.
pub fn parse_fd_line(line: &str) -> Option<u64> {
    if line.starts_with("fd: ") {
        line["fd: ".len()..].parse::<u64>().ok()
    } else {
        None
    }
}
