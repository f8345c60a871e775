//! User settings for the budget allocator
//!
//! Holds the allocation cap, the slider step, display preferences and the
//! default log level.

use serde::{Deserialize, Serialize};

use super::paths::AllocatorPaths;
use crate::error::AllocatorError;

/// Default amount to distribute across the three categories
pub const DEFAULT_MAX_TOTAL: u64 = 1_200_000;

/// Default slider increment
pub const DEFAULT_STEP: u64 = 1_000;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Total amount that must be allocated before a budget can be saved
    #[serde(default = "default_max_total")]
    pub max_total: u64,

    /// Increment applied by one slider step
    #[serde(default = "default_step")]
    pub step: u64,

    /// Suffix shown after amounts (e.g. "kr")
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_total() -> u64 {
    DEFAULT_MAX_TOTAL
}

fn default_step() -> u64 {
    DEFAULT_STEP
}

fn default_currency_suffix() -> String {
    "kr".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            max_total: default_max_total(),
            step: default_step(),
            currency_suffix: default_currency_suffix(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &AllocatorPaths) -> Result<Self, AllocatorError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| AllocatorError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| AllocatorError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AllocatorPaths) -> Result<(), AllocatorError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AllocatorError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| AllocatorError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings the editor cannot work with
    pub fn validate(&self) -> Result<(), AllocatorError> {
        if self.max_total == 0 {
            return Err(AllocatorError::Config("max_total must be positive".into()));
        }
        if self.step == 0 || self.step > self.max_total {
            return Err(AllocatorError::Config(format!(
                "step must be between 1 and {}",
                self.max_total
            )));
        }
        Ok(())
    }

    /// Format an amount with the configured suffix
    pub fn format_amount(&self, amount: u64) -> String {
        format!("{} {}", amount, self.currency_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.max_total, 1_200_000);
        assert_eq!(settings.step, 1_000);
        assert_eq!(settings.currency_suffix, "kr");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AllocatorPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            max_total: 90_000,
            step: 500,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.max_total, 90_000);
        assert_eq!(loaded.step, 500);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"step": 250}"#).unwrap();
        assert_eq!(settings.step, 250);
        assert_eq!(settings.max_total, DEFAULT_MAX_TOTAL);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_invalid_step_rejected() {
        let settings = Settings {
            step: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(Settings::default().format_amount(500_000), "500000 kr");
    }
}
