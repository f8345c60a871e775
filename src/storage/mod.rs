//! Storage layer
//!
//! A string-keyed store with atomic JSON file writes, plus the helpers that
//! persist the budget collection inside it.

pub mod budgets;
pub mod file_io;
pub mod kv;

pub use budgets::{load_budgets, save_budgets, BUDGETS_KEY};
pub use file_io::{read_json, write_json_atomic};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};

use crate::config::paths::AllocatorPaths;
use crate::error::AllocatorError;

/// Open the file-backed store for the given paths, creating directories as needed
pub fn open_store(paths: &AllocatorPaths) -> Result<JsonFileStore, AllocatorError> {
    paths.ensure_directories()?;
    Ok(JsonFileStore::new(paths.store_file()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_store_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AllocatorPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = open_store(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(store.path(), paths.store_file());
    }
}
