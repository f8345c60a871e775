//! Logging setup
//!
//! Log records go to a file in the base directory so they never draw over
//! the TUI. `RUST_LOG` takes precedence over the configured level.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AllocatorError;

/// Build the filter from `RUST_LOG`, falling back to `default_level`
pub fn make_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber, appending to `log_path`
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(log_path: &Path, default_level: &str) -> Result<(), AllocatorError> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::options()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| {
            AllocatorError::Io(format!("Cannot open log file {}: {}", log_path.display(), e))
        })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(make_filter(default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(())
}
