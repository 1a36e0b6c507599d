//! Export functionality for outlay
//!
//! Writes the expense collection to CSV or JSON for use outside the
//! application.

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use self::json::export_expenses_json;
