//! Persistence of the saved budget collection
//!
//! The whole collection lives under one key as a JSON array.

use crate::error::{AllocatorError, AllocatorResult};
use crate::models::{parse_collection, serialize_collection, Budget};

use super::kv::KeyValueStore;

/// Key under which the collection is stored
pub const BUDGETS_KEY: &str = "Budgets";

/// Read the persisted collection
///
/// Returns `Ok(None)` when nothing has been stored yet, and
/// [`AllocatorError::CorruptStorage`] when the stored text does not parse.
pub fn load_budgets<S: KeyValueStore + ?Sized>(store: &S) -> AllocatorResult<Option<Vec<Budget>>> {
    let Some(text) = store.get_item(BUDGETS_KEY)? else {
        return Ok(None);
    };

    parse_collection(&text)
        .map(Some)
        .map_err(|e| AllocatorError::CorruptStorage(format!("{} entry: {}", BUDGETS_KEY, e)))
}

/// Replace the persisted collection
pub fn save_budgets<S: KeyValueStore + ?Sized>(store: &mut S, budgets: &[Budget]) -> AllocatorResult<()> {
    let text = serialize_collection(budgets)?;
    store.set_item(BUDGETS_KEY, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_load_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(load_budgets(&store).unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let budgets = vec![Budget::new(700_000, 500_000, 0), Budget::new(0, 0, 1_200_000)];

        save_budgets(&mut store, &budgets).unwrap();
        assert_eq!(load_budgets(&store).unwrap(), Some(budgets));
    }

    #[test]
    fn test_load_corrupt_entry() {
        let store = MemoryStore::with_item(BUDGETS_KEY, "[{\"market\":");
        assert!(load_budgets(&store).unwrap_err().is_corrupt());
    }
}
