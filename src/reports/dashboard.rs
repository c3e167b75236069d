//! Dashboard Report
//!
//! The overview screen: net worth, total spent, spending by category and
//! the latest expenses.

use crate::ledger::AppState;
use crate::models::Expense;

use super::net_worth::NetWorthReport;
use super::spending::SpendingReport;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub net_worth: NetWorthReport,
    pub spending: SpendingReport,
    /// Most recently added expenses, newest first
    pub recent: Vec<Expense>,
}

impl DashboardReport {
    pub fn generate(state: &AppState, recent_count: usize) -> Self {
        Self {
            net_worth: NetWorthReport::generate(state.capitals()),
            spending: SpendingReport::generate(state.expenses()),
            recent: state.expense_store().recent(recent_count).to_vec(),
        }
    }

    pub fn capital_count(&self) -> usize {
        self.net_worth.positions.len()
    }
}
