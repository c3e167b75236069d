//! Expense display formatting
//!
//! Formats expenses as a newest-first register, resolving each expense's
//! capital to its name.

use chrono::NaiveDate;

use crate::models::{format_date, Capital, CapitalId, Expense};

use super::report::truncate;

/// Name of the capital an expense draws on
fn capital_name(capitals: &[Capital], id: CapitalId) -> &str {
    capitals
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or("(unknown)")
}

/// Date in the configured format, or ISO when the format cannot be applied
fn display_date(date: NaiveDate, date_format: &str) -> String {
    format_date(date, date_format).unwrap_or_else(|| date.to_string())
}

/// Format a single expense as a register row
pub fn format_expense_row(
    expense: &Expense,
    capitals: &[Capital],
    symbol: &str,
    date_format: &str,
) -> String {
    format!(
        "{:<12}  {:<10}  {:<24}  {:<17}  {:<16}  {:>12}",
        expense.id.to_string(),
        display_date(expense.date, date_format),
        truncate(expense.description(), 24),
        expense.category.label(),
        truncate(capital_name(capitals, expense.capital_id), 16),
        format!("-{}", expense.amount.format_with_symbol(symbol)),
    )
}

/// Format a list of expenses as a register
pub fn format_expense_list(
    expenses: &[&Expense],
    capitals: &[Capital],
    symbol: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<24}  {:<17}  {:<16}  {:>12}\n",
        "ID", "Date", "Description", "Category", "Capital", "Amount"
    ));
    output.push_str(&"-".repeat(101));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, capitals, symbol, date_format));
        output.push('\n');
    }

    output
}

/// Format expense details for display
pub fn format_expense_details(
    expense: &Expense,
    capitals: &[Capital],
    symbol: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.id));
    output.push_str(&format!(
        "  Date:     {}\n",
        display_date(expense.date, date_format)
    ));
    output.push_str(&format!(
        "  Amount:   {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Category: {}\n", expense.category));
    output.push_str(&format!(
        "  Capital:  {}\n",
        capital_name(capitals, expense.capital_id)
    ));
    if !expense.note.is_empty() {
        output.push_str(&format!("  Note:     {}\n", expense.note));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn fixtures() -> (Vec<Capital>, Expense) {
        let cash = Capital::new("Cash", Money::from_units(1000), "#10b981");
        let expense = Expense::new(
            cash.id,
            Money::from_cents(1250),
            Category::FoodAndDining,
            "Lunch",
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        );
        (vec![cash], expense)
    }

    #[test]
    fn test_format_expense_list() {
        let (capitals, expense) = fixtures();
        let output = format_expense_list(&[&expense], &capitals, "$", "%Y-%m-%d");

        assert!(output.contains("Lunch"));
        assert!(output.contains("Food & Dining"));
        assert!(output.contains("Cash"));
        assert!(output.contains("-$12.50"));
        assert!(output.contains("2024-03-15"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_expense_list(&[], &[], "$", "%Y-%m-%d");
        assert!(output.contains("No expenses found"));
    }

    #[test]
    fn test_row_uses_category_when_note_empty_and_date_format() {
        let (capitals, mut expense) = fixtures();
        expense.note.clear();
        let row = format_expense_row(&expense, &capitals, "£", "%d/%m/%Y");
        assert!(row.contains("15/03/2024"));
        assert!(row.contains("-£12.50"));
        assert_eq!(row.matches("Food & Dining").count(), 2);
    }

    #[test]
    fn test_unusable_date_format_falls_back_to_iso() {
        let (capitals, expense) = fixtures();
        let row = format_expense_row(&expense, &capitals, "$", "%Q");
        assert!(row.contains("2024-03-15"));

        let details = format_expense_details(&expense, &capitals, "$", "%H:%M");
        assert!(details.contains("Date:     2024-03-15"));
    }

    #[test]
    fn test_unknown_capital_name() {
        let (_, expense) = fixtures();
        let output = format_expense_details(&expense, &[], "$", "%Y-%m-%d");
        assert!(output.contains("(unknown)"));
        assert!(output.contains("Note:     Lunch"));
    }
}
