//! String-keyed persistent storage
//!
//! Mirrors a browser's local storage: string keys map to string values, and
//! every write is durable immediately.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::AllocatorResult;

use super::file_io::{read_json, write_json_atomic};

/// A persistent string-to-string store
pub trait KeyValueStore {
    /// Look up `key`, returning `None` if it has never been set
    fn get_item(&self, key: &str) -> AllocatorResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> AllocatorResult<()>;

    /// Delete `key` if present
    fn remove_item(&mut self, key: &str) -> AllocatorResult<()>;
}

/// Store backed by a single JSON object file
///
/// The file is re-read on every access so that separate CLI invocations and
/// the TUI always observe each other's writes.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_map(&self) -> AllocatorResult<BTreeMap<String, String>> {
        read_json(&self.path)
    }

    /// Load the map for a write; an unreadable file is replaced
    fn load_map_for_write(&self) -> AllocatorResult<BTreeMap<String, String>> {
        match self.load_map() {
            Err(e) if e.is_corrupt() => {
                warn!(error = %e, path = %self.path.display(), "replacing unreadable store");
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> AllocatorResult<Option<String>> {
        Ok(self.load_map()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> AllocatorResult<()> {
        let mut map = self.load_map_for_write()?;
        map.insert(key.to_string(), value.to_string());
        write_json_atomic(&self.path, &map)?;
        debug!(key, bytes = value.len(), path = %self.path.display(), "store write");
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AllocatorResult<()> {
        let mut map = self.load_map_for_write()?;
        if map.remove(key).is_some() {
            write_json_atomic(&self.path, &map)?;
            debug!(key, path = %self.path.display(), "store remove");
        }
        Ok(())
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> AllocatorResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AllocatorResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AllocatorResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("store.json"));
        assert_eq!(store.get_item("Budgets").unwrap(), None);
    }

    #[test]
    fn test_file_store_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("store.json");
        let mut store = JsonFileStore::new(path.clone());

        store.set_item("Budgets", "[]").unwrap();
        store.set_item("Other", "x").unwrap();
        assert_eq!(store.get_item("Budgets").unwrap().as_deref(), Some("[]"));

        // A fresh handle sees the same data
        let reopened = JsonFileStore::new(path);
        assert_eq!(reopened.get_item("Other").unwrap().as_deref(), Some("x"));

        store.remove_item("Other").unwrap();
        assert_eq!(reopened.get_item("Other").unwrap(), None);
        assert_eq!(reopened.get_item("Budgets").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "{ broken").unwrap();

        let mut store = JsonFileStore::new(path);
        assert!(store.get_item("Budgets").unwrap_err().is_corrupt());

        store.set_item("Budgets", "[]").unwrap();
        assert_eq!(store.get_item("Budgets").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::with_item("a", "1");
        assert_eq!(store.get_item("a").unwrap().as_deref(), Some("1"));
        store.remove_item("a").unwrap();
        assert_eq!(store.get_item("a").unwrap(), None);
    }
}
