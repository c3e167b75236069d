//! Capital display formatting
//!
//! Formats capitals for terminal output in table and detail views.

use crate::models::Capital;
use crate::reports::NetWorthReport;

use super::report::{format_percentage, text_width};

/// Format capitals with balances, share of net worth and low-funds status
pub fn format_capital_list(report: &NetWorthReport, symbol: &str) -> String {
    if report.positions.is_empty() {
        return "No capitals found.\n".to_string();
    }

    // Calculate column widths
    let name_width = report
        .positions
        .iter()
        .map(|p| text_width(&p.capital.name))
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<12}  {:>12}  {:>12}  {:>6}  {:>6}  {}\n",
        "Name",
        "ID",
        "Initial",
        "Balance",
        "Left",
        "Share",
        "Status",
        name_width = name_width,
    ));
    output.push_str(&separator_row(name_width));

    for position in &report.positions {
        let capital = &position.capital;
        let left = position
            .percent_remaining
            .map(|p| format!("{}%", p))
            .unwrap_or_else(|| "-".to_string());
        let status = if position.low_funds { "LOW FUNDS" } else { "" };

        output.push_str(&format!(
            "{:<name_width$}  {:<12}  {:>12}  {:>12}  {:>6}  {:>6}  {}\n",
            capital.name,
            capital.id.to_string(),
            capital.initial_balance.format_with_symbol(symbol),
            capital.current_balance.format_with_symbol(symbol),
            left,
            format_percentage(position.share),
            status,
            name_width = name_width,
        ));
    }

    output.push_str(&separator_row(name_width));
    output.push_str(&format!(
        "{:<name_width$}  {:<12}  {:>12}  {:>12}\n",
        "TOTAL",
        "",
        report.total_initial.format_with_symbol(symbol),
        report.net_worth.format_with_symbol(symbol),
        name_width = name_width,
    ));

    output
}

fn separator_row(name_width: usize) -> String {
    format!(
        "{:-<name_width$}  {:-<12}  {:->12}  {:->12}  {:->6}  {:->6}  {:-<9}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    )
}

/// Format a single capital's details
pub fn format_capital_details(capital: &Capital, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Capital: {}\n", capital.name));
    output.push_str(&format!("  ID:              {}\n", capital.id));
    output.push_str(&format!("  Color:           {}\n", capital.color));
    output.push_str(&format!(
        "  Initial Balance: {}\n",
        capital.initial_balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Current Balance: {}\n",
        capital.current_balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Spent:           {}\n",
        capital.spent().format_with_symbol(symbol)
    ));

    if let Some(percent) = capital.percent_remaining() {
        output.push_str(&format!("  Remaining:       {}%\n", percent));
    }
    if capital.is_low_funds() {
        output.push_str("  Warning:         less than 20% of the initial balance remains\n");
    }

    output
}
