//! Budget CLI commands
//!
//! Scriptable counterparts of the TUI editor. Amounts go through the same
//! clamping and save rules as the sliders.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_details, format_budget_table};
use crate::error::{AllocatorError, AllocatorResult};
use crate::models::Field;
use crate::services::BudgetEditor;
use crate::storage::KeyValueStore;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// List saved budgets
    #[command(alias = "ls")]
    List,

    /// Show one saved budget
    Show {
        /// Position in the list (starting at 0)
        index: usize,
    },

    /// Save a new budget; the three amounts must add up to the total
    Add {
        /// Market allocation
        #[arg(short, long, default_value_t = 0)]
        market: u64,
        /// Development allocation
        #[arg(short, long, default_value_t = 0)]
        development: u64,
        /// Sales allocation
        #[arg(short, long, default_value_t = 0)]
        sell: u64,
    },

    /// Change a saved budget; omitted amounts keep their value
    #[command(alias = "edit")]
    Update {
        /// Position in the list (starting at 0)
        index: usize,
        #[arg(short, long)]
        market: Option<u64>,
        #[arg(short, long)]
        development: Option<u64>,
        #[arg(short, long)]
        sell: Option<u64>,
    },

    /// Remove a saved budget
    #[command(alias = "rm")]
    Remove {
        /// Position in the list (starting at 0)
        index: usize,
    },
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    editor: &mut BudgetEditor<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> AllocatorResult<()> {
    match cmd {
        BudgetCommands::List => {
            println!("{}", format_budget_table(editor.budgets(), settings));
        }

        BudgetCommands::Show { index } => {
            let budget = editor
                .budgets()
                .get(index)
                .ok_or_else(|| AllocatorError::invalid_index(index, editor.budgets().len()))?;
            print!("{}", format_budget_details(index, budget, settings));
        }

        BudgetCommands::Add {
            market,
            development,
            sell,
        } => {
            editor.cancel_edit();
            apply_amounts(
                editor,
                settings,
                [
                    (Field::Market, Some(market)),
                    (Field::Development, Some(development)),
                    (Field::Sell, Some(sell)),
                ],
            );
            let budget = editor.current();
            let index = editor.save_budget()?;
            println!("Saved budget #{}: {}", index, budget);
        }

        BudgetCommands::Update {
            index,
            market,
            development,
            sell,
        } => {
            if market.is_none() && development.is_none() && sell.is_none() {
                println!("No changes specified. Use --market, --development, or --sell.");
                return Ok(());
            }

            editor.edit_budget(index)?;
            apply_amounts(
                editor,
                settings,
                [
                    (Field::Market, market),
                    (Field::Development, development),
                    (Field::Sell, sell),
                ],
            );
            let budget = editor.current();
            if let Err(e) = editor.save_budget() {
                editor.cancel_edit();
                return Err(e);
            }
            println!("Updated budget #{}: {}", index, budget);
        }

        BudgetCommands::Remove { index } => {
            let removed = editor.remove_budget(index)?;
            println!("Removed budget #{}: {}", index, removed);
        }
    }

    Ok(())
}

/// Feed requested amounts through the editor, decreases first so that
/// headroom freed by one field is available to the others
fn apply_amounts<S: KeyValueStore>(
    editor: &mut BudgetEditor<S>,
    settings: &Settings,
    requests: [(Field, Option<u64>); 3],
) {
    let mut requests: Vec<(Field, u64)> = requests
        .into_iter()
        .filter_map(|(field, amount)| amount.map(|a| (field, a)))
        .collect();
    requests.sort_by_key(|&(field, amount)| amount > editor.value(field));

    for (field, requested) in requests {
        let accepted = editor.adjust(field, requested);
        if accepted != requested {
            println!(
                "{} clamped to {} (requested {})",
                field,
                settings.format_amount(accepted),
                settings.format_amount(requested)
            );
        }
    }
}
