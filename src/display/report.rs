//! Report formatting for terminal output
//!
//! Renders the spending breakdown and the dashboard, plus the small
//! alignment helpers the other display modules share.

use crate::models::Capital;
use crate::reports::{DashboardReport, SpendingReport};

use super::capital::format_capital_list;
use super::expense::format_expense_list;

const BAR_WIDTH: usize = 20;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a section header with an underline
pub fn format_header(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(text_width(title)))
}

/// Display width in characters
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if text_width(s) <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Format spending per category, largest first, with a bar per row
pub fn format_spending_report(report: &SpendingReport, symbol: &str) -> String {
    if report.is_empty() {
        return "No spending recorded.\n".to_string();
    }

    let max = report
        .categories
        .first()
        .map(|c| c.total.cents() as f64)
        .unwrap_or(0.0);

    let mut output = String::new();
    for entry in &report.categories {
        output.push_str(&format!(
            "{:<17}  {:>12}  {:>6}  {:>4} txn  {}\n",
            entry.category.label(),
            entry.total.format_with_symbol(symbol),
            format_percentage(entry.percentage),
            entry.count,
            format_bar(entry.total.cents() as f64, max, BAR_WIDTH),
        ));
    }
    output
}

/// Format the dashboard overview
pub fn format_dashboard(
    report: &DashboardReport,
    capitals: &[Capital],
    symbol: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format_header("CapTrack Dashboard"));
    output.push_str(&format!(
        "Net Worth:    {}  ({} capitals)\n",
        report.net_worth.net_worth.format_with_symbol(symbol),
        report.capital_count()
    ));
    output.push_str(&format!(
        "Total Spent:  {}  ({} transactions)\n",
        report.spending.total_spent.format_with_symbol(symbol),
        report.spending.transaction_count
    ));

    for position in report.net_worth.low_funds() {
        output.push_str(&format!(
            "Warning: {} is low on funds ({} left)\n",
            position.capital.name,
            position.capital.current_balance.format_with_symbol(symbol)
        ));
    }
    output.push('\n');

    output.push_str(&format_header("Capitals"));
    output.push_str(&format_capital_list(&report.net_worth, symbol));
    output.push('\n');

    output.push_str(&format_header("Spending by Category"));
    output.push_str(&format_spending_report(&report.spending, symbol));
    output.push('\n');

    output.push_str(&format_header("Recent Expenses"));
    let recent: Vec<_> = report.recent.iter().collect();
    output.push_str(&format_expense_list(&recent, capitals, symbol, date_format));

    output
}
