//! Expense model
//!
//! A single dated, categorized spending event drawn against exactly one
//! capital. Expenses are never edited in place; they are added or removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::{CapitalId, ExpenseId};
use super::money::Money;

/// A spending record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// The capital this expense was paid from
    pub capital_id: CapitalId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// Free-text note
    #[serde(default)]
    pub note: String,

    /// Calendar date of the transaction
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense with a fresh identifier
    pub fn new(
        capital_id: CapitalId,
        amount: Money,
        category: Category,
        note: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            capital_id,
            amount,
            category,
            note: note.into(),
            date,
        }
    }

    /// Note if present, otherwise the category label
    pub fn description(&self) -> &str {
        if self.note.trim().is_empty() {
            self.category.label()
        } else {
            &self.note
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if !self.amount.is_in_range() {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.description(), self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Expense amount {} exceeds {}", amount, Money::MAX)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Render a date with a strftime pattern
///
/// Returns `None` when the pattern is malformed or needs fields a calendar
/// date does not have (e.g. `%H`).
pub fn format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    use std::fmt::Write as _;

    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// Parse an ISO calendar date (YYYY-MM-DD)
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
}
