//! Application state container
//!
//! Owns both stores and the theme preference. Every mutation ends by
//! re-deriving capital balances, so `current_balance` always equals the
//! initial balance minus the expenses drawn against it.

use chrono::NaiveDate;

use crate::error::CapTrackResult;
use crate::models::{Capital, CapitalId, Category, Expense, ExpenseId, Money, Theme};

use super::balance::recompute_balances;
use super::capitals::CapitalStore;
use super::expenses::{ExpenseFilter, ExpenseStore};

/// Capitals created on first run
pub const DEFAULT_CAPITALS: [(&str, i64, &str); 2] = [
    ("Cash", 1000, "#10b981"),
    ("Bank Account", 5000, "#3b82f6"),
];

/// Outcome of deleting a capital
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapitalDeletion {
    /// Whether a capital was removed
    pub removed: bool,
    /// Expenses removed along with it
    pub expenses_removed: usize,
}

/// All ledger state, owned by the application entry point
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    capitals: CapitalStore,
    expenses: ExpenseStore,
    theme: Theme,
}

impl AppState {
    /// An empty ledger (no capitals, no expenses)
    pub fn new() -> Self {
        Self::default()
    }

    /// First-run state with the default capitals
    pub fn seeded() -> Self {
        let capitals = DEFAULT_CAPITALS
            .iter()
            .map(|(name, units, color)| Capital::new(*name, Money::from_units(*units), *color))
            .collect();
        Self::from_parts(capitals, Vec::new(), Theme::default())
    }

    /// Rebuild state from persisted collections
    ///
    /// Records that fail validation are dropped, then expenses pointing at
    /// capitals that no longer exist. Balances are re-derived rather than
    /// trusted.
    pub fn from_parts(capitals: Vec<Capital>, expenses: Vec<Expense>, theme: Theme) -> Self {
        let capitals: Vec<Capital> = capitals
            .into_iter()
            .filter(|capital| match capital.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(id = %capital.id, error = %e, "dropped invalid capital");
                    false
                }
            })
            .collect();
        let expenses: Vec<Expense> = expenses
            .into_iter()
            .filter(|expense| match expense.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(id = %expense.id, error = %e, "dropped invalid expense");
                    false
                }
            })
            .collect();

        let mut state = Self {
            capitals: CapitalStore::from_vec(capitals),
            expenses: ExpenseStore::from_vec(expenses),
            theme,
        };
        let pruned = state.expenses.retain_known(&state.capitals);
        if pruned > 0 {
            tracing::warn!(pruned, "dropped expenses referencing missing capitals");
        }
        state.recompute_balances();
        state
    }

    pub fn capitals(&self) -> &[Capital] {
        self.capitals.list()
    }

    pub fn expenses(&self) -> &[Expense] {
        self.expenses.list()
    }

    pub fn capital_store(&self) -> &CapitalStore {
        &self.capitals
    }

    pub fn expense_store(&self) -> &ExpenseStore {
        &self.expenses
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn add_capital(
        &mut self,
        name: &str,
        initial_balance: Money,
        color: &str,
    ) -> CapTrackResult<Capital> {
        let capital = self.capitals.add(name, initial_balance, color)?;
        self.recompute_balances();
        Ok(capital)
    }

    /// Delete a capital together with every expense drawn against it
    ///
    /// Deleting an unknown id changes nothing.
    pub fn delete_capital(&mut self, id: CapitalId) -> CapitalDeletion {
        if !self.capitals.delete(id) {
            return CapitalDeletion {
                removed: false,
                expenses_removed: 0,
            };
        }

        let expenses_removed = self.expenses.remove_for_capital(id);
        self.recompute_balances();
        CapitalDeletion {
            removed: true,
            expenses_removed,
        }
    }

    pub fn add_expense(
        &mut self,
        capital_id: CapitalId,
        amount: Money,
        category: Category,
        note: &str,
        date: NaiveDate,
    ) -> CapTrackResult<Expense> {
        let expense = self
            .expenses
            .add(&self.capitals, capital_id, amount, category, note, date)?;
        self.recompute_balances();
        Ok(expense)
    }

    /// Delete an expense; unknown ids are a no-op
    pub fn delete_expense(&mut self, id: ExpenseId) -> bool {
        let removed = self.expenses.delete(id);
        if removed {
            self.recompute_balances();
        }
        removed
    }

    pub fn filter_expenses(&self, filter: &ExpenseFilter) -> Vec<&Expense> {
        self.expenses.filter(filter)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Re-derive every capital's current balance
    pub fn recompute_balances(&mut self) {
        let derived = recompute_balances(self.capitals.list(), self.expenses.list());
        self.capitals.replace_all(derived);
    }
}
