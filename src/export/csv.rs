//! CSV export functionality
//!
//! Exports the expense collection as CSV: one header row, one data row per
//! record, dates as ISO-8601 and amounts as decimal text.

use std::io::Write;

use crate::error::{OutlayError, OutlayResult};
use crate::models::Expense;

/// Write all expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> OutlayResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "amount", "category", "date", "description"])
        .map_err(|e| OutlayError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.amount.to_string(),
                expense.category.clone(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.description.clone(),
            ])
            .map_err(|e| OutlayError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| OutlayError::Export(e.to_string()))?;

    Ok(())
}
