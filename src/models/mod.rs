//! Core data models for CapTrack
//!
//! This module contains the data structures of the ledger domain:
//! capitals, expenses, money amounts and their identifiers.

pub mod capital;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod theme;

pub use capital::{Capital, DEFAULT_CAPITAL_COLOR};
pub use category::Category;
pub use expense::{format_date, parse_date, Expense};
pub use ids::{CapitalId, ExpenseId};
pub use money::Money;
pub use theme::Theme;
