//! JSON export of saved budgets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{AllocatorError, AllocatorResult};
use crate::models::Budget;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported collection with enough context to interpret it later
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    /// Cap the budgets were allocated against
    pub max_total: u64,
    pub budget_count: usize,
    pub budgets: Vec<Budget>,
}

impl BudgetExport {
    pub fn new(budgets: &[Budget], max_total: u64) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            max_total,
            budget_count: budgets.len(),
            budgets: budgets.to_vec(),
        }
    }
}

/// Write the collection as pretty-printed JSON
pub fn export_budgets_json<W: Write>(
    budgets: &[Budget],
    max_total: u64,
    writer: &mut W,
) -> AllocatorResult<()> {
    let export = BudgetExport::new(budgets, max_total);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| AllocatorError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AllocatorError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_export() {
        let budgets = [Budget::new(700_000, 500_000, 0)];
        let mut out = Vec::new();
        export_budgets_json(&budgets, 1_200_000, &mut out).unwrap();

        let parsed: BudgetExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.budget_count, 1);
        assert_eq!(parsed.budgets, budgets.to_vec());
    }
}
