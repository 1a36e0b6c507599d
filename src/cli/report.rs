//! Report and search CLI commands
//!
//! Implements the summary/monthly/yearly/top commands and the search
//! command on top of the report engine. These are read-only; the store is
//! only consulted for its current snapshot.

use clap::{Args, Subcommand};
use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::display::{format_expense_table, format_period_report, format_summary};
use crate::error::{OutlayError, OutlayResult};
use crate::reports;
use crate::storage::ExpenseStore;

use super::parse_date;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Category-wise summary of all expenses
    Summary,

    /// Report for one calendar month
    Month {
        /// Year (e.g. 2025)
        year: i32,
        /// Month (1-12)
        month: u32,
    },

    /// Report for one calendar year
    Year {
        /// Year (e.g. 2025)
        year: i32,
    },

    /// Largest expenses by amount
    Top {
        /// How many expenses to show
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },
}

/// Search arguments (all filters optional, combined with AND)
#[derive(Args)]
pub struct SearchArgs {
    /// Exact category match
    #[arg(short, long)]
    pub category: Option<String>,

    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Case-insensitive text to find in descriptions
    #[arg(short, long)]
    pub text: Option<String>,
}

/// Handle a report command
pub fn handle_report_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> OutlayResult<()> {
    let expenses = store.all();
    let symbol = &settings.currency_symbol;

    match cmd {
        ReportCommands::Summary => {
            let summaries = reports::summarize_by_category(&expenses);
            print!("{}", format_summary(&summaries, symbol));

            if let Some(top) = reports::top_category(&expenses) {
                println!();
                println!(
                    "Top category:    {} ({})",
                    top.category,
                    top.total.format_with_symbol(symbol)
                );
            }
            if let Some(day) = reports::most_active_day(&expenses) {
                println!(
                    "Most active day: {} ({} record(s))",
                    day.date.format("%Y-%m-%d"),
                    day.count
                );
            }
        }

        ReportCommands::Month { year, month } => {
            if !(1..=12).contains(&month) {
                return Err(OutlayError::Validation(format!(
                    "Invalid month (expected 1-12): {}",
                    month
                )));
            }

            let report = reports::monthly_report(&expenses, year, month);
            let title = month_title(year, month);
            print!("{}", format_period_report(&title, &report, symbol));
        }

        ReportCommands::Year { year } => {
            let report = reports::yearly_report(&expenses, year);
            let title = format!("Report for {}", year);
            print!("{}", format_period_report(&title, &report, symbol));
        }

        ReportCommands::Top { limit } => {
            let top = reports::top_expenses(&expenses, limit);
            print!("{}", format_expense_table(&top, symbol));
        }
    }

    Ok(())
}

/// Handle a search command
pub fn handle_search_command(
    store: &ExpenseStore,
    settings: &Settings,
    args: SearchArgs,
) -> OutlayResult<()> {
    let mut filter = reports::SearchFilter::new();
    if let Some(category) = args.category {
        filter = filter.category(category);
    }
    if let Some(from) = args.from {
        filter = filter.date_from(parse_date(&from)?);
    }
    if let Some(to) = args.to {
        filter = filter.date_to(parse_date(&to)?);
    }
    if let Some(text) = args.text {
        filter = filter.text(text);
    }

    let expenses = store.all();
    let results: Vec<_> = reports::search(&expenses, &filter).cloned().collect();

    println!("Found {} matching expense(s).", results.len());
    if !results.is_empty() {
        print!(
            "{}",
            format_expense_table(&results, &settings.currency_symbol)
        );
    }

    Ok(())
}

/// Human-readable title for a monthly report
fn month_title(year: i32, month: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => format!("Report for {}", date.format("%B %Y")),
        None => format!("Report for {}-{:02}", year, month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_title() {
        assert_eq!(month_title(2025, 1), "Report for January 2025");
    }
}
