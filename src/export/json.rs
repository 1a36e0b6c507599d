//! JSON export functionality
//!
//! Exports the expense collection as a pretty-printed JSON array.

use std::io::Write;

use crate::error::{OutlayError, OutlayResult};
use crate::models::Expense;

/// Write all expenses as a pretty-printed JSON array
pub fn export_expenses_json<W: Write>(expenses: &[Expense], mut writer: W) -> OutlayResult<()> {
    serde_json::to_writer_pretty(&mut writer, expenses)
        .map_err(|e| OutlayError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| OutlayError::Export(e.to_string()))?;
    Ok(())
}
