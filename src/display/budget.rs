//! Budget display formatting
//!
//! Formats saved budgets for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::models::{Budget, Field};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Development")]
    development: String,
    #[tabled(rename = "Sales")]
    sell: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format saved budgets as a table
pub fn format_budget_table(budgets: &[Budget], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No saved budgets.\n\nRun 'allocator budget add' or 'allocator tui' to create one."
            .to_string();
    }

    let rows = budgets.iter().enumerate().map(|(index, budget)| BudgetRow {
        index,
        market: settings.format_amount(budget.market),
        development: settings.format_amount(budget.development),
        sell: settings.format_amount(budget.sell),
        total: settings.format_amount(budget.total()),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format one budget with its share of the total per category
pub fn format_budget_details(index: usize, budget: &Budget, settings: &Settings) -> String {
    let total = budget.total();
    let mut output = format!("Budget #{}\n", index);
    output.push_str(&"=".repeat(36));
    output.push('\n');

    for field in Field::ALL {
        let amount = budget.get(field);
        let share = if total == 0 {
            0.0
        } else {
            amount as f64 * 100.0 / total as f64
        };
        output.push_str(&format!(
            "{:<12} {:>16} {:>5.1}%\n",
            field.label(),
            settings.format_amount(amount),
            share
        ));
    }

    output.push_str(&format!("{:<12} {:>16}\n", "Total", settings.format_amount(total)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let output = format_budget_table(&[], &Settings::default());
        assert!(output.starts_with("No saved budgets."));
    }

    #[test]
    fn test_table_contains_rows() {
        let budgets = [Budget::new(700_000, 500_000, 0)];
        let output = format_budget_table(&budgets, &Settings::default());
        assert!(output.contains("Development"));
        assert!(output.contains("700000 kr"));
        assert!(output.contains("1200000 kr"));
    }

    #[test]
    fn test_details_shares() {
        let budget = Budget::new(600_000, 300_000, 300_000);
        let output = format_budget_details(2, &budget, &Settings::default());
        assert!(output.starts_with("Budget #2"));
        assert!(output.contains("50.0%"));
        assert!(output.contains("25.0%"));
    }
}
