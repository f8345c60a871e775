//! CLI command for exporting saved budgets

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{AllocatorError, AllocatorResult};
use crate::export::{export_budgets, ExportFormat};
use crate::models::Budget;

/// Arguments for `allocator export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(
    budgets: &[Budget],
    max_total: u64,
    args: ExportArgs,
) -> AllocatorResult<()> {
    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                AllocatorError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_budgets(budgets, max_total, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| AllocatorError::Export(e.to_string()))?;
            eprintln!(
                "Exported {} budget(s) to {}",
                budgets.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export_budgets(budgets, max_total, args.format, &mut writer)?;
        }
    }

    Ok(())
}
