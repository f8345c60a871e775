//! Custom error types for the budget allocator
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for allocator operations
#[derive(Error, Debug)]
pub enum AllocatorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The persisted budget collection could not be parsed
    #[error("Corrupt storage: {0}")]
    CorruptStorage(String),

    /// Index does not address a saved budget
    #[error("Invalid index {index}: {len} saved budget(s)")]
    InvalidIndex { index: usize, len: usize },

    /// Save attempted before the full amount was allocated
    #[error("Budget incomplete: allocated {total} of {max}")]
    BudgetIncomplete { total: u64, max: u64 },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl AllocatorError {
    /// Create an "invalid index" error for a collection of `len` budgets
    pub fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex { index, len }
    }

    /// Check if this is an "invalid index" error
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }

    /// Check if this is a corrupt storage error
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptStorage(_))
    }
}

impl From<std::io::Error> for AllocatorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AllocatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for allocator operations
pub type AllocatorResult<T> = Result<T, AllocatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AllocatorError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_index_error() {
        let err = AllocatorError::invalid_index(4, 2);
        assert_eq!(err.to_string(), "Invalid index 4: 2 saved budget(s)");
        assert!(err.is_invalid_index());
        assert!(!err.is_corrupt());
    }

    #[test]
    fn test_budget_incomplete_error() {
        let err = AllocatorError::BudgetIncomplete {
            total: 700_000,
            max: 1_200_000,
        };
        assert_eq!(
            err.to_string(),
            "Budget incomplete: allocated 700000 of 1200000"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AllocatorError = io_err.into();
        assert!(matches!(err, AllocatorError::Io(_)));
    }
}
