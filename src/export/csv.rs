//! CSV export of saved budgets

use std::io::Write;

use crate::error::{AllocatorError, AllocatorResult};
use crate::models::Budget;

/// Write one row per budget: index, the three categories and the total
pub fn export_budgets_csv<W: Write>(budgets: &[Budget], writer: W) -> AllocatorResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Index", "Market", "Development", "Sales", "Total"])
        .map_err(|e| AllocatorError::Export(e.to_string()))?;

    for (index, budget) in budgets.iter().enumerate() {
        csv_writer
            .write_record([
                index.to_string(),
                budget.market.to_string(),
                budget.development.to_string(),
                budget.sell.to_string(),
                budget.total().to_string(),
            ])
            .map_err(|e| AllocatorError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| AllocatorError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_export() {
        let budgets = [Budget::new(700_000, 500_000, 0), Budget::new(0, 0, 1_200_000)];
        let mut out = Vec::new();
        export_budgets_csv(&budgets, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Index,Market,Development,Sales,Total");
        assert_eq!(lines[1], "0,700000,500000,0,1200000");
        assert_eq!(lines[2], "1,0,0,1200000,1200000");
    }
}
