//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the tracker service.

pub mod capital;
pub mod expense;
pub mod settings;

pub use capital::{handle_capital_command, CapitalCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use settings::{handle_reset_command, handle_show_command, handle_theme_command, ThemeAction};

use chrono::NaiveDate;

use crate::error::{CapTrackError, CapTrackResult};
use crate::models::{parse_date, Category, Money};

/// Parse a user-entered amount
pub(crate) fn parse_money(input: &str, field: &str) -> CapTrackResult<Money> {
    Money::parse(input).map_err(|e| {
        CapTrackError::Validation(format!(
            "Invalid {}: '{}'. Use format like '1000.00' or '1000'. Error: {}",
            field, input, e
        ))
    })
}

pub(crate) fn parse_category(input: &str) -> CapTrackResult<Category> {
    input.parse().map_err(CapTrackError::Validation)
}

pub(crate) fn parse_date_arg(input: &str) -> CapTrackResult<NaiveDate> {
    parse_date(input).map_err(|_| {
        CapTrackError::Validation(format!(
            "Invalid date: '{}'. Use YYYY-MM-DD format.",
            input
        ))
    })
}
