//! Display formatting for terminal output
//!
//! Provides utilities for formatting capitals, expenses and reports as
//! aligned text tables.

pub mod capital;
pub mod expense;
pub mod report;

pub use capital::{format_capital_details, format_capital_list};
pub use expense::{format_expense_details, format_expense_list};
pub use report::{format_dashboard, format_spending_report};
