//! Terminal output formatting for CLI commands

pub mod budget;

pub use budget::{format_budget_details, format_budget_table};
