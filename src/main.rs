use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;

use budget_allocator::cli::{handle_budget_command, handle_export_command, BudgetCommands, ExportArgs};
use budget_allocator::config::{paths::AllocatorPaths, settings::Settings};
use budget_allocator::logging::init_logging;
use budget_allocator::services::BudgetEditor;
use budget_allocator::storage::open_store;

#[derive(Parser)]
#[command(
    name = "allocator",
    version,
    about = "Split a fixed budget across market, development and sales",
    long_about = "Budget Allocator distributes a fixed total across three categories. \
                  Allocations can never exceed the total, and a budget can only be \
                  saved once the whole amount is allocated. Saved budgets persist \
                  locally and can be edited or removed later."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Saved budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export saved budgets
    Export(ExportArgs),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AllocatorPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    paths.ensure_directories()?;
    init_logging(&paths.log_file(), &settings.log_level)?;

    let store = open_store(&paths)?;
    let mut editor = BudgetEditor::from_settings(store, &settings);

    match cli.command {
        None | Some(Commands::Tui) => {
            budget_allocator::tui::run_tui(editor, &settings)?;
        }
        Some(Commands::Budget(cmd)) => {
            hydrate_or_warn(&mut editor)?;
            handle_budget_command(&mut editor, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            hydrate_or_warn(&mut editor)?;
            handle_export_command(editor.budgets(), settings.max_total, args)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote settings to {}", paths.settings_file().display());
                println!();
            }
            println!("Budget Allocator Configuration");
            println!("==============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Store file:     {}", paths.store_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Total to allocate: {}", settings.format_amount(settings.max_total));
            println!("  Slider step:       {}", settings.format_amount(settings.step));
            println!("  Log level:         {}", settings.log_level);
        }
    }

    Ok(())
}

/// Unreadable saved budgets are reported and replaced by an empty list
fn hydrate_or_warn<S: budget_allocator::storage::KeyValueStore>(
    editor: &mut BudgetEditor<S>,
) -> Result<()> {
    match editor.hydrate() {
        Ok(()) => Ok(()),
        Err(e) if e.is_corrupt() => {
            warn!(error = %e, "continuing with empty collection");
            eprintln!("Warning: {}. Continuing with an empty list.", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
