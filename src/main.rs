use anyhow::Result;
use clap::{Parser, Subcommand};

use outlay::cli::{
    handle_backup_command, handle_expense_command, handle_export_command, handle_report_command,
    handle_search_command, BackupCommands, ExpenseCommands, ExportCommands, ReportCommands,
    SearchArgs,
};
use outlay::config::{paths::OutlayPaths, settings::Settings};
use outlay::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Command-line personal expense tracker",
    long_about = "outlay records expenses (amount, category, date, description) to a \
                  local JSON file and reports on them: category summaries, monthly and \
                  yearly reports, top expenses, and search."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands (add, list, update, delete)
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Reports over recorded expenses
    #[command(subcommand)]
    Report(ReportCommands),

    /// Search expenses by category, date range, or text
    Search(SearchArgs),

    /// Export the expense collection
    #[command(subcommand)]
    Export(ExportCommands),

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = OutlayPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    // Load the expense store
    let mut store = ExpenseStore::new(paths.expenses_file());
    store.load()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Search(args)) => {
            handle_search_command(&store, &settings, args)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&store, cmd)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("outlay configuration");
            println!("====================");
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Backing file:     {}", paths.expenses_file().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!(
                "  Backups kept:     {}",
                settings.backup_retention.keep_count
            );
        }
        None => {
            println!("outlay - command-line personal expense tracker");
            println!();
            println!("Run 'outlay --help' for usage information.");
            println!("Run 'outlay expense add <amount> <category>' to record an expense.");
        }
    }

    Ok(())
}
