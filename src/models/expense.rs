//! Expense record model
//!
//! An expense is one spending entry: an amount, a free-form category, a
//! calendar date, and an optional description. Ids are assigned by the
//! store on creation and never change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// One recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store
    pub id: ExpenseId,

    /// Amount spent, always strictly positive
    pub amount: Money,

    /// Free-form category label
    pub category: String,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.description
        )
    }
}

/// Input for creating a new expense (the store assigns the id)
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

impl NewExpense {
    /// Create a new expense input, trimming the text fields
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category: category.into().trim().to_string(),
            date,
            description: description.into().trim().to_string(),
        }
    }
}

/// Partial set of field changes for an existing expense
///
/// Every field is optional; omitted fields keep their prior values. The id
/// is deliberately not representable here.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the amount
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Change the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into().trim().to_string());
        self
    }

    /// Change the date
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Change the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into().trim().to_string());
        self
    }

    /// Check whether this update changes anything
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.description.is_none()
    }

    /// Apply the changes to an expense, leaving omitted fields untouched
    pub fn apply_to(&self, expense: &mut Expense) {
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(category) = &self.category {
            expense.category = category.clone();
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
        if let Some(description) = &self.description {
            expense.description = description.clone();
        }
    }
}
