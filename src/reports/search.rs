//! Expense search
//!
//! Filtered, lazy iteration over an expense snapshot. All provided
//! predicates must match (logical AND); an empty filter passes every
//! record through unchanged.

use chrono::NaiveDate;

use crate::models::Expense;

/// Search criteria for expenses
///
/// Unset fields do not constrain the result.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Exact category match
    pub category: Option<String>,
    /// Inclusive lower bound on the date
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the date
    pub date_to: Option<NaiveDate>,
    /// Case-insensitive substring match on the description
    pub text: Option<String>,
}

impl SearchFilter {
    /// Create an empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an exact category match
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Require dates on or after the given date
    pub fn date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Require dates on or before the given date
    pub fn date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Require the description to contain the given text, ignoring case
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Check whether an expense matches every provided predicate
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = &self.category {
            if &expense.category != category {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if expense.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if expense.date > to {
                return false;
            }
        }
        if let Some(text) = &self.text {
            if !expense
                .description
                .to_lowercase()
                .contains(&text.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Lazily iterate the records matching the filter, in input order
pub fn search<'a>(
    expenses: &'a [Expense],
    filter: &'a SearchFilter,
) -> impl Iterator<Item = &'a Expense> + 'a {
    expenses.iter().filter(move |e| filter.matches(e))
}
