//! Spending summaries and period reports
//!
//! Aggregates an expense snapshot into category totals, monthly/yearly
//! reports, the top category, and the most active day. Summaries keep
//! first-seen order, so ties resolve to whichever category or date was
//! reached first in the input sequence.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Expense, Money};

/// Total and record count for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    /// Category label
    pub category: String,
    /// Total amount spent in this category
    pub total: Money,
    /// Number of records in this category
    pub count: usize,
}

/// Category breakdown plus totals for a filtered time window
#[derive(Debug, Clone)]
pub struct PeriodReport {
    /// Per-category totals, first-seen order
    pub categories: Vec<CategorySummary>,
    /// Total spending in the window
    pub total: Money,
    /// Number of records in the window
    pub count: usize,
}

impl PeriodReport {
    /// Average amount per record, zero for an empty window
    pub fn average(&self) -> Money {
        if self.count == 0 {
            Money::zero()
        } else {
            Money::from_cents(self.total.cents() / self.count as i64)
        }
    }
}

/// The calendar date with the highest record count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub count: usize,
}

/// Sum of `amount` over the given records
pub fn total_spending(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Per-category totals and counts, in first-seen order
pub fn summarize_by_category(expenses: &[Expense]) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for expense in expenses {
        match index.get(&expense.category) {
            Some(&i) => {
                summaries[i].total += expense.amount;
                summaries[i].count += 1;
            }
            None => {
                index.insert(expense.category.clone(), summaries.len());
                summaries.push(CategorySummary {
                    category: expense.category.clone(),
                    total: expense.amount,
                    count: 1,
                });
            }
        }
    }

    summaries
}

/// Category breakdown and totals for one calendar month
pub fn monthly_report(expenses: &[Expense], year: i32, month: u32) -> PeriodReport {
    let filtered: Vec<Expense> = expenses
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .cloned()
        .collect();
    summarize_period(&filtered)
}

/// Category breakdown and totals for one calendar year
pub fn yearly_report(expenses: &[Expense], year: i32) -> PeriodReport {
    let filtered: Vec<Expense> = expenses
        .iter()
        .filter(|e| e.date.year() == year)
        .cloned()
        .collect();
    summarize_period(&filtered)
}

fn summarize_period(expenses: &[Expense]) -> PeriodReport {
    PeriodReport {
        categories: summarize_by_category(expenses),
        total: total_spending(expenses),
        count: expenses.len(),
    }
}

/// The category with the highest total amount
///
/// Ties resolve to the first category reaching the maximum in summary
/// traversal order, i.e. first-seen order of the input.
pub fn top_category(expenses: &[Expense]) -> Option<CategorySummary> {
    let mut best: Option<CategorySummary> = None;
    for summary in summarize_by_category(expenses) {
        match &best {
            Some(current) if summary.total <= current.total => {}
            _ => best = Some(summary),
        }
    }
    best
}

/// The calendar date with the highest record count
///
/// Same tie-break rule as [`top_category`], applied over distinct dates.
pub fn most_active_day(expenses: &[Expense]) -> Option<DayActivity> {
    let mut days: Vec<DayActivity> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for expense in expenses {
        match index.get(&expense.date) {
            Some(&i) => days[i].count += 1,
            None => {
                index.insert(expense.date, days.len());
                days.push(DayActivity {
                    date: expense.date,
                    count: 1,
                });
            }
        }
    }

    let mut best: Option<DayActivity> = None;
    for day in days {
        match &best {
            Some(current) if day.count <= current.count => {}
            _ => best = Some(day),
        }
    }
    best
}

/// The `n` largest expenses by amount, highest first
///
/// The sort is stable, so equal amounts keep their input order.
pub fn top_expenses(expenses: &[Expense], n: usize) -> Vec<Expense> {
    let mut sorted: Vec<Expense> = expenses.to_vec();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
    sorted.truncate(n);
    sorted
}
