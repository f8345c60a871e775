//! Business logic layer
//!
//! The budget editor mediates between transient slider state and the
//! persisted collection.

pub mod editor;

pub use editor::BudgetEditor;
