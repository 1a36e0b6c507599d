//! Report display formatting
//!
//! Formats category summaries and period reports for terminal display,
//! mirroring the register-style output of the expense views.

use crate::models::Money;
use crate::reports::{CategorySummary, PeriodReport};

/// Format a category summary with percentages and a grand total
pub fn format_summary(summaries: &[CategorySummary], currency_symbol: &str) -> String {
    if summaries.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let total: Money = summaries.iter().map(|s| s.total).sum();

    let mut output = String::new();
    output.push_str(&format!(
        "{:<20} {:>12} {:>7} {:>8}\n",
        "Category", "Amount", "Count", "%"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for summary in summaries {
        let percentage = if total.is_zero() {
            0.0
        } else {
            (summary.total.cents() as f64 / total.cents() as f64) * 100.0
        };
        output.push_str(&format!(
            "{:<20} {:>12} {:>7} {:>7.1}%\n",
            summary.category,
            summary.total.format_with_symbol(currency_symbol),
            summary.count,
            percentage
        ));
    }

    output.push_str(&"-".repeat(50));
    output.push('\n');
    output.push_str(&format!(
        "{:<20} {:>12}\n",
        "TOTAL",
        total.format_with_symbol(currency_symbol)
    ));

    output
}

/// Format a period report (title, totals, category breakdown)
pub fn format_period_report(title: &str, report: &PeriodReport, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", title));
    output.push_str(&"=".repeat(50));
    output.push('\n');

    if report.count == 0 {
        output.push_str("No expenses in this period.\n");
        return output;
    }

    output.push_str(&format!(
        "Total:   {}\n",
        report.total.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Records: {}\n", report.count));
    output.push_str(&format!(
        "Average: {}\n\n",
        report.average().format_with_symbol(currency_symbol)
    ));

    output.push_str(&format_summary(&report.categories, currency_symbol));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries() -> Vec<CategorySummary> {
        vec![
            CategorySummary {
                category: "Food".to_string(),
                total: Money::from_cents(12950),
                count: 2,
            },
            CategorySummary {
                category: "Transport".to_string(),
                total: Money::from_cents(200),
                count: 1,
            },
        ]
    }

    #[test]
    fn test_summary_contains_totals() {
        let output = format_summary(&summaries(), "$");
        assert!(output.contains("Food"));
        assert!(output.contains("$129.50"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$131.50"));
    }

    #[test]
    fn test_empty_summary() {
        let output = format_summary(&[], "$");
        assert!(output.contains("No expenses"));
    }

    #[test]
    fn test_period_report() {
        let report = PeriodReport {
            categories: summaries(),
            total: Money::from_cents(13150),
            count: 3,
        };
        let output = format_period_report("Report for January 2025", &report, "$");
        assert!(output.contains("Report for January 2025"));
        assert!(output.contains("Total:   $131.50"));
        assert!(output.contains("Records: 3"));
    }

    #[test]
    fn test_empty_period_report() {
        let report = PeriodReport {
            categories: Vec::new(),
            total: Money::zero(),
            count: 0,
        };
        let output = format_period_report("Report for February 2025", &report, "$");
        assert!(output.contains("No expenses in this period."));
    }
}
