//! Tracing subscriber setup
//!
//! Plain commands log to stderr. The TUI owns the terminal, so while it runs
//! logs go to `<cache_dir>/catalogr/catalogr.log` instead.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "catalogr=debug";

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to the cache-dir log file
    File,
}

/// Filter for the given verbosity
///
/// `RUST_LOG` wins unless `--verbose` was passed.
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Path of the TUI log file, if the platform has a cache directory
#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("catalogr").join("catalogr.log"))
}

/// Install the global subscriber
///
/// Returns the log file path when logging to a file. Calling this twice is
/// harmless; the second subscriber is ignored.
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be created.
pub fn init(verbose: bool, target: LogTarget) -> io::Result<Option<PathBuf>> {
    let filter = filter(verbose);

    match target {
        LogTarget::Stderr => {
            let _ = fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init();
            Ok(None)
        }
        LogTarget::File => {
            let Some(path) = log_file_path() else {
                return Ok(None);
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let _ = fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
            Ok(Some(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter_ignores_env() {
        assert_eq!(filter(true).to_string(), VERBOSE_FILTER);
    }

    #[test]
    fn test_log_file_under_cache_dir() {
        if let (Some(path), Some(cache)) = (log_file_path(), dirs::cache_dir()) {
            assert!(path.starts_with(cache));
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("catalogr.log"));
        }
    }
}
