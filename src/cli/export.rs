//! Export CLI commands
//!
//! Writes the expense collection to CSV or JSON, to stdout or a file.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{OutlayError, OutlayResult};
use crate::export::{export_expenses_csv, export_expenses_json};
use crate::storage::ExpenseStore;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export expenses as CSV
    Csv {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export expenses as JSON
    Json {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(store: &ExpenseStore, cmd: ExportCommands) -> OutlayResult<()> {
    let expenses = store.all();

    match cmd {
        ExportCommands::Csv { output } => match output {
            Some(path) => {
                let file = File::create(&path)
                    .map_err(|e| OutlayError::Export(format!("{}: {}", path.display(), e)))?;
                export_expenses_csv(&expenses, BufWriter::new(file))?;
                println!("Exported {} expense(s) to {}", expenses.len(), path.display());
            }
            None => export_expenses_csv(&expenses, io::stdout().lock())?,
        },

        ExportCommands::Json { output } => match output {
            Some(path) => {
                let file = File::create(&path)
                    .map_err(|e| OutlayError::Export(format!("{}: {}", path.display(), e)))?;
                export_expenses_json(&expenses, BufWriter::new(file))?;
                println!("Exported {} expense(s) to {}", expenses.len(), path.display());
            }
            None => export_expenses_json(&expenses, io::stdout().lock())?,
        },
    }

    Ok(())
}
