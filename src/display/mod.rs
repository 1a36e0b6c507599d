//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and reports for terminal
//! display. The core never prints; these functions build strings for the
//! CLI layer to write out.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_table};
pub use report::{format_period_report, format_summary};
