//! Tracker service
//!
//! Owns the ledger state and the store it is persisted to. Every successful
//! mutation is followed by a snapshot write; a rejected mutation writes
//! nothing.

use chrono::NaiveDate;

use crate::error::{CapTrackError, CapTrackResult};
use crate::ledger::{AppState, CapitalDeletion, ExpenseFilter};
use crate::models::{Capital, CapitalId, Category, Expense, ExpenseId, Money, Theme};
use crate::storage::{self, KeyValueStore, LoadOutcome};

const CAPITAL_ID_PREFIX: &str = "cap-";

/// Ledger state bound to its persistence backend
pub struct Tracker<S: KeyValueStore> {
    store: S,
    state: AppState,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Load state from the store, seeding and persisting defaults on first run
    pub fn open(mut store: S) -> CapTrackResult<Self> {
        let (state, outcome) = storage::load_state(&store)?;
        if outcome == LoadOutcome::FirstRun {
            tracing::info!("no saved capitals found, seeding defaults");
            storage::save_state(&mut store, &state)?;
        }
        tracing::debug!(
            capitals = state.capitals().len(),
            expenses = state.expenses().len(),
            "ledger loaded"
        );
        Ok(Self { store, state })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn capitals(&self) -> &[Capital] {
        self.state.capitals()
    }

    pub fn expenses(&self) -> &[Expense] {
        self.state.expenses()
    }

    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    pub fn filter_expenses(&self, filter: &ExpenseFilter) -> Vec<&Expense> {
        self.state.filter_expenses(filter)
    }

    pub fn add_capital(
        &mut self,
        name: &str,
        initial_balance: Money,
        color: &str,
    ) -> CapTrackResult<Capital> {
        let capital = self.state.add_capital(name, initial_balance, color)?;
        self.persist()?;
        tracing::info!(id = %capital.id, name = %capital.name, "capital added");
        Ok(capital)
    }

    /// Delete a capital and every expense drawn against it
    pub fn delete_capital(&mut self, id: CapitalId) -> CapTrackResult<CapitalDeletion> {
        let outcome = self.state.delete_capital(id);
        if outcome.removed {
            self.persist()?;
            tracing::info!(%id, expenses_removed = outcome.expenses_removed, "capital deleted");
        } else {
            tracing::debug!(%id, "delete of unknown capital ignored");
        }
        Ok(outcome)
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
            .state
            .add_expense(capital_id, amount, category, note, date)?;
        self.persist()?;
        tracing::info!(id = %expense.id, capital = %capital_id, amount = %expense.amount, "expense added");
        Ok(expense)
    }

    /// Delete an expense; returns false if it did not exist
    pub fn delete_expense(&mut self, id: ExpenseId) -> CapTrackResult<bool> {
        let removed = self.state.delete_expense(id);
        if removed {
            self.persist()?;
            tracing::info!(%id, "expense deleted");
        }
        Ok(removed)
    }

    pub fn set_theme(&mut self, theme: Theme) -> CapTrackResult<Theme> {
        self.state.set_theme(theme);
        storage::save_theme(&mut self.store, theme)?;
        Ok(theme)
    }

    pub fn toggle_theme(&mut self) -> CapTrackResult<Theme> {
        let theme = self.state.theme().toggled();
        self.set_theme(theme)
    }

    /// Clear all persisted data and return to the first-run state
    pub fn reset(&mut self) -> CapTrackResult<()> {
        self.state = storage::reset(&mut self.store)?;
        tracing::info!("ledger reset");
        Ok(())
    }

    /// Resolve a capital by id or by name
    ///
    /// Id forms win over names: a full UUID first, then a `cap-` short id,
    /// then a case-insensitive name, and finally a bare id prefix.
    pub fn find_capital(&self, identifier: &str) -> CapTrackResult<&Capital> {
        let capitals = self.state.capital_store();
        if let Ok(id) = identifier.parse::<CapitalId>() {
            if let Some(capital) = capitals.get(id) {
                return Ok(capital);
            }
        }

        let by_prefix: Vec<_> = capitals
            .list()
            .iter()
            .filter(|c| c.id.matches_prefix(identifier))
            .collect();

        if identifier.trim().starts_with(CAPITAL_ID_PREFIX) && !by_prefix.is_empty() {
            return unique_match(by_prefix, identifier, CapTrackError::capital_not_found);
        }
        if let Some(capital) = capitals.find_by_name(identifier) {
            return Ok(capital);
        }
        unique_match(by_prefix, identifier, CapTrackError::capital_not_found)
    }

    /// Resolve an expense by full id or short id
    pub fn find_expense(&self, identifier: &str) -> CapTrackResult<&Expense> {
        let expenses = self.state.expense_store();
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            if let Some(expense) = expenses.get(id) {
                return Ok(expense);
            }
        }

        let matches: Vec<_> = expenses
            .list()
            .iter()
            .filter(|e| e.id.matches_prefix(identifier))
            .collect();
        unique_match(matches, identifier, CapTrackError::expense_not_found)
    }

    /// Give back the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> CapTrackResult<()> {
        storage::save_state(&mut self.store, &self.state)
    }
}

fn unique_match<'a, T, F>(matches: Vec<&'a T>, identifier: &str, not_found: F) -> CapTrackResult<&'a T>
where
    F: FnOnce(String) -> CapTrackError,
{
    match matches.as_slice() {
        [single] => Ok(*single),
        [] => Err(not_found(identifier.to_string())),
        _ => Err(CapTrackError::Validation(format!(
            "Identifier '{}' is ambiguous ({} matches)",
            identifier,
            matches.len()
        ))),
    }
}
