//! Reports module for CapTrack
//!
//! Read-only aggregate views recomputed on demand from the ledger: net
//! worth, spending by category, and the dashboard overview.

pub mod dashboard;
pub mod net_worth;
pub mod spending;

pub use dashboard::DashboardReport;
pub use net_worth::{total_net_worth, CapitalPosition, NetWorthReport};
pub use spending::{SpendingByCategory, SpendingReport};
