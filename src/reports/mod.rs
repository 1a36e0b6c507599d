//! Report engine for outlay
//!
//! Read-only aggregation and search over an expense snapshot. Everything
//! here is a pure function of its input slice: no caching, no persistence,
//! deterministic given the same input order.

pub mod search;
pub mod summary;

pub use search::{search, SearchFilter};
pub use summary::{
    monthly_report, most_active_day, summarize_by_category, top_category, top_expenses,
    total_spending, yearly_report, CategorySummary, DayActivity, PeriodReport,
};
