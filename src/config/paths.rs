//! Path management for the budget allocator
//!
//! ## Path Resolution Order
//!
//! 1. `ALLOCATOR_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/budget-allocator` on Linux,
//!    `%APPDATA%\budget-allocator` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::AllocatorError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "ALLOCATOR_DATA_DIR";

const APP_DIR_NAME: &str = "budget-allocator";

/// Manages all paths used by the allocator
#[derive(Debug, Clone)]
pub struct AllocatorPaths {
    base_dir: PathBuf,
}

impl AllocatorPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, AllocatorError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the key-value store backing saved budgets
    pub fn store_file(&self) -> PathBuf {
        self.data_dir().join("store.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("allocator.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), AllocatorError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AllocatorError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| AllocatorError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, AllocatorError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| AllocatorError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}
