//! Expense CLI commands
//!
//! Implements the add/list/show/update/delete commands as thin glue over
//! the expense store.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::OutlayResult;
use crate::models::{ExpenseId, ExpenseUpdate, NewExpense};
use crate::storage::ExpenseStore;

use super::{parse_amount, parse_date};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount spent (decimal, e.g. 12.50)
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category label
        category: String,

        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },

    /// List all expenses
    List,

    /// Show one expense in detail
    Show {
        /// Expense id
        id: ExpenseId,
    },

    /// Update fields of an existing expense
    Update {
        /// Expense id
        id: ExpenseId,

        /// New amount (decimal)
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense id
        id: ExpenseId,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> OutlayResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => chrono::Local::now().date_naive(),
            };

            let expense = store.add(NewExpense::new(amount, category, date, description))?;
            println!("Added expense {}.", expense.id);
            print!("{}", format_expense_details(&expense, &settings.currency_symbol));
        }

        ExpenseCommands::List => {
            let expenses = store.all();
            print!(
                "{}",
                format_expense_table(&expenses, &settings.currency_symbol)
            );
            if !expenses.is_empty() {
                println!("Total: {} expense(s)", expenses.len());
            }
        }

        ExpenseCommands::Show { id } => {
            let expense = store.get(id)?;
            print!("{}", format_expense_details(&expense, &settings.currency_symbol));
        }

        ExpenseCommands::Update {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let mut update = ExpenseUpdate::new();
            if let Some(s) = amount {
                update = update.amount(parse_amount(&s)?);
            }
            if let Some(s) = category {
                update = update.category(s);
            }
            if let Some(s) = date {
                update = update.date(parse_date(&s)?);
            }
            if let Some(s) = description {
                update = update.description(s);
            }

            if update.is_empty() {
                println!("Nothing to update.");
                return Ok(());
            }

            let expense = store.update(id, update)?;
            println!("Updated expense {}.", expense.id);
            print!("{}", format_expense_details(&expense, &settings.currency_symbol));
        }

        ExpenseCommands::Delete { id } => {
            store.delete(id)?;
            println!("Deleted expense {}.", id);
        }
    }

    Ok(())
}
