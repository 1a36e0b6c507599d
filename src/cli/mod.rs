//! CLI command handlers
//!
//! This module bridges clap argument parsing with the expense store and
//! report engine. Handlers translate text arguments into typed inputs,
//! call exactly one core operation, and format the result for the
//! terminal.

pub mod backup;
pub mod expense;
pub mod export;
pub mod report;

pub use backup::{handle_backup_command, BackupCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, handle_search_command, ReportCommands, SearchArgs};

use chrono::NaiveDate;

use crate::error::{OutlayError, OutlayResult};
use crate::models::Money;

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(s: &str) -> OutlayResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| OutlayError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s)))
}

/// Parse a decimal amount argument
pub(crate) fn parse_amount(s: &str) -> OutlayResult<Money> {
    Money::parse(s).map_err(|e| OutlayError::Validation(e.to_string()))
}
