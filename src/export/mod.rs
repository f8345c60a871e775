//! Export of the saved budget collection
//!
//! - CSV: one row per budget, spreadsheet-compatible
//! - JSON: machine-readable, with schema version and timestamp
//! - YAML: human-readable form of the JSON export

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use crate::error::AllocatorResult;
use crate::models::Budget;

pub use self::csv::export_budgets_csv;
pub use self::json::{export_budgets_json, BudgetExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_budgets_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

/// Write `budgets` in the requested format
pub fn export_budgets<W: Write>(
    budgets: &[Budget],
    max_total: u64,
    format: ExportFormat,
    writer: &mut W,
) -> AllocatorResult<()> {
    match format {
        ExportFormat::Json => export_budgets_json(budgets, max_total, writer),
        ExportFormat::Yaml => export_budgets_yaml(budgets, max_total, writer),
        ExportFormat::Csv => export_budgets_csv(budgets, writer),
    }
}
