//! Ledger core
//!
//! The capital and expense stores, the balance deriver, and the state
//! container that ties them together.

pub mod balance;
pub mod capitals;
pub mod expenses;
pub mod state;

pub use balance::{recompute_balances, spent_by_capital};
pub use capitals::CapitalStore;
pub use expenses::{ExpenseFilter, ExpenseStore};
pub use state::{AppState, CapitalDeletion, DEFAULT_CAPITALS};
