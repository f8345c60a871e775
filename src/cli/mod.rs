//! CLI command handlers
//!
//! Bridges clap argument parsing with the budget editor.

pub mod budget;
pub mod export;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportArgs};
