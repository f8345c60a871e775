//! YAML export of saved budgets

use std::io::Write;

use crate::error::{AllocatorError, AllocatorResult};
use crate::export::json::BudgetExport;
use crate::models::Budget;

/// Write the collection as YAML with a short comment header
pub fn export_budgets_yaml<W: Write>(
    budgets: &[Budget],
    max_total: u64,
    writer: &mut W,
) -> AllocatorResult<()> {
    let export = BudgetExport::new(budgets, max_total);

    writeln!(writer, "# Budget allocator export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer))
        .map_err(|e| AllocatorError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| AllocatorError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_export() {
        let budgets = [Budget::new(0, 1_200_000, 0)];
        let mut out = Vec::new();
        export_budgets_yaml(&budgets, 1_200_000, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# Budget allocator export"));
        assert!(text.contains("development: 1200000"));

        let parsed: BudgetExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.budgets, budgets.to_vec());
    }
}
