//! Budget Allocator - split a fixed total across market, development and sales
//!
//! The three allocations are adjusted independently but can never add up to
//! more than the configured total. Once the full amount is allocated the
//! split can be saved; saved budgets are kept in a local key-value store and
//! can later be edited or removed.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: The `Budget` record, categories and the clamping rule
//! - `storage`: Key-value store with atomic JSON file writes
//! - `services`: The budget editor
//! - `cli`, `display`, `export`: Command-line surface
//! - `tui`: Interactive terminal interface
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use budget_allocator::models::Field;
//! use budget_allocator::services::BudgetEditor;
//! use budget_allocator::storage::MemoryStore;
//!
//! let mut editor = BudgetEditor::new(MemoryStore::new());
//! editor.hydrate().unwrap();
//! editor.adjust(Field::Market, 700_000);
//! assert_eq!(editor.adjust(Field::Development, 600_000), 500_000);
//! editor.save_budget().unwrap();
//! assert_eq!(editor.budgets().len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{AllocatorError, AllocatorResult};
