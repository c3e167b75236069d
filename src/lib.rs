//! CapTrack - personal capital and expense tracker
//!
//! The user keeps named pools of money ("capitals"), logs expenses drawn
//! against them, and reads derived balances and spending breakdowns. Every
//! capital's current balance is recomputed from its initial balance and
//! the expenses that reference it after each change.
//!
//! # Architecture
//!
//! - `models`: money, identifiers, capitals, expenses, categories, theme
//! - `ledger`: the capital and expense stores, balance derivation and the
//!   `AppState` container every mutation goes through
//! - `storage`: the key-value persistence boundary and its snapshot format
//! - `services`: the `Tracker`, which persists state after each mutation
//! - `reports`: net worth, spending by category and the dashboard
//! - `display` and `view`: terminal formatting and the top-level views
//! - `cli`: clap subcommands and their handlers
//! - `config`: data directory resolution and user settings
//!
//! # Example
//!
//! ```rust,ignore
//! use captrack::services::Tracker;
//! use captrack::storage::MemoryStore;
//!
//! let mut tracker = Tracker::open(MemoryStore::new())?;
//! let cash = tracker.find_capital("Cash")?.id;
//! tracker.add_expense(cash, "12.50".parse()?, Default::default(), "Lunch", today)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod view;

pub use error::{CapTrackError, CapTrackResult};
