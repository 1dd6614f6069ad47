//! File-backed `tracing` setup. The terminal belongs to the UI, so events are
//! only recorded when a log file is given.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::LogError;

/// Build the event filter: `RUST_LOG` wins over the `default` directive.
pub fn build_filter(default: &str) -> Result<EnvFilter, LogError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default).map_err(|e| LogError::Filter {
            filter: default.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Install a global subscriber appending to `path`.
pub fn init(path: &Path, level: &str) -> Result<(), LogError> {
    let filter = build_filter(level)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|_| LogError::AlreadyInstalled)?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
