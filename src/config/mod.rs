//! Configuration module
//!
//! This module provides configuration management including:
//! - Path resolution for settings, the store and the log file
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AllocatorPaths;
pub use settings::Settings;
