use fork_probe::{Error, Result};

use std::env::{self, VarError};
use std::path::PathBuf;
use std::time::Duration;

pub const DELAY_VAR: &str = "FORK_PROBE_DELAY";
pub const FILE_VAR: &str = "FORK_PROBE_FILE";

pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);
pub const DEFAULT_FILE: &str = "x";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// How long the probe waits before opening the file.
    pub delay: Duration,
    /// The file the probe opens, relative paths are resolved against the working directory.
    pub file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            file: PathBuf::from(DEFAULT_FILE),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| match env::var(name) {
            Ok(v) => Ok(Some(v)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(format!("{} is not valid unicode", name)),
        })
    }

    /// Builds a config from `lookup`, which returns the value of a variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<Option<String>, String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup(DELAY_VAR).map_err(Error::from)? {
            cfg.delay = parse_time_value(&v)
                .map_err(|e| Error::from(format!("{} for {}", e, DELAY_VAR)))?;
        }
        if let Some(v) = lookup(FILE_VAR).map_err(Error::from)? {
            if v.is_empty() {
                return Err(Error::from(format!("{} must not be empty", FILE_VAR)));
            }
            cfg.file = PathBuf::from(v);
        }
        Ok(cfg)
    }
}

fn split_number(num: &str) -> (&str, &str) {
    let len = num.len();
    let num_len = num.len()
        - num
            .chars()
            .rev()
            .position(|c| c.is_digit(10))
            .unwrap_or(len);
    (&num[0..num_len], &num[num_len..len])
}

fn parse_time_unit(c: char) -> Option<f64> {
    match c {
        's' => Some(1.0),
        'm' => Some(60.0),
        'h' => Some(3600.0),
        'd' => Some(86400.0),
        _ => None,
    }
}

fn parse_time_degree(c: char) -> Option<f64> {
    match c {
        'm' => Some(1e-3),
        'u' => Some(1e-6),
        'n' => Some(1e-9),
        _ => None,
    }
}

/// Splits `s` into a number and an optional multiplier built from a degree and a unit.
fn parse_value<T, U>(s: &str, parse_degree: T, parse_unit: U) -> Option<(f64, Option<f64>)>
where
    T: Fn(char) -> Option<f64>,
    U: Fn(char) -> Option<f64>,
{
    let (num_str, suffix) = split_number(s);
    let mut suffix_chars = suffix.chars();
    let v = num_str.parse::<f64>().ok()?;
    let a = match suffix_chars.next() {
        Some(a) => a,
        None => return Some((v, None)),
    };
    match (suffix_chars.next(), suffix_chars.next()) {
        (None, _) => parse_degree(a).or(parse_unit(a)).map(|mult| (v, Some(mult))),
        (Some(b), None) => {
            let degree = parse_degree(a)?;
            parse_unit(b).map(|unit| (v, Some(degree * unit)))
        }
        _ => None,
    }
}

fn parse_time_value(v: &str) -> std::result::Result<Duration, String> {
    match parse_value(v, parse_time_degree, parse_time_unit) {
        Some((val, mult)) if val >= 0.0 => {
            let usec = (val * mult.unwrap_or(1.0) * 1e6) as u64;
            Ok(Duration::from_micros(usec))
        }
        _ => Err(format!("Invalid value '{}'", v)),
    }
}
