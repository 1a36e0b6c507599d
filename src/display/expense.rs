//! Expense display formatting
//!
//! Formats expense records as a terminal table and as a detail view.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            date: e.date.format("%Y-%m-%d").to_string(),
            category: e.category.clone(),
            amount: e.amount.format_with_symbol(currency_symbol),
            description: truncate(&e.description, 40),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format a single expense for a detail view
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!(
        "Date:        {}\n",
        expense.date.format("%Y-%m-%d")
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));

    if expense.description.is_empty() {
        output.push_str("Description: (none)\n");
    } else {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output
}

/// Truncate a string to a maximum display length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;

    fn sample() -> Expense {
        Expense {
            id: ExpenseId::new(1),
            amount: Money::from_cents(12450),
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
            description: "groceries".to_string(),
        }
    }

    #[test]
    fn test_empty_table() {
        let output = format_expense_table(&[], "$");
        assert!(output.contains("No expenses"));
    }

    #[test]
    fn test_table_contains_fields() {
        let output = format_expense_table(&[sample()], "$");
        assert!(output.contains("Food"));
        assert!(output.contains("$124.50"));
        assert!(output.contains("2025-01-12"));
        assert!(output.contains("groceries"));
    }

    #[test]
    fn test_details() {
        let output = format_expense_details(&sample(), "$");
        assert!(output.contains("Expense:     1"));
        assert!(output.contains("Amount:      $124.50"));
        assert!(output.contains("Description: groceries"));
    }

    #[test]
    fn test_empty_description_shown_as_none() {
        let mut expense = sample();
        expense.description.clear();
        let output = format_expense_details(&expense, "$");
        assert!(output.contains("Description: (none)"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very lo…");
    }
}
