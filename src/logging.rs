//! Log file setup
//!
//! The TUI owns stdout, so log output goes to a file next to the settings.
//! `RUST_LOG` takes precedence over the `log_level` setting.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};

/// Build the filter from `RUST_LOG`, falling back to the configured level
pub fn build_filter(level: &str) -> LedgerResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level)
        .map_err(|e| LedgerError::Logging(format!("Invalid log level '{}': {}", level, e)))
}

/// Install the global subscriber writing to the log file
pub fn init_logging(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| LedgerError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&settings.log_level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LedgerError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("pocket_ledger=debug,warn").is_ok());
    }
}
