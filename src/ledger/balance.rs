//! Balance derivation
//!
//! The only place a capital's current balance is computed.

use std::collections::HashMap;

use crate::models::{Capital, CapitalId, Expense, Money};

/// Recompute every capital's current balance from the expense list
///
/// Each output capital has `current_balance = initial_balance - Σ(amount of
/// expenses with a matching capital id)`. Capitals keep their input order.
/// Runs in O(capitals + expenses). Sums saturate instead of wrapping; new
/// expenses are checked against overflow before they are stored.
pub fn recompute_balances(capitals: &[Capital], expenses: &[Expense]) -> Vec<Capital> {
    let spent = spent_by_capital(expenses);

    capitals
        .iter()
        .map(|capital| {
            let drawn = spent.get(&capital.id).copied().unwrap_or_default();
            Capital {
                current_balance: capital.initial_balance.saturating_sub(drawn),
                ..capital.clone()
            }
        })
        .collect()
}

/// Sum of expense amounts keyed by capital
pub fn spent_by_capital(expenses: &[Expense]) -> HashMap<CapitalId, Money> {
    let mut spent: HashMap<CapitalId, Money> = HashMap::new();
    for expense in expenses {
        let drawn = spent.entry(expense.capital_id).or_default();
        *drawn = drawn.saturating_add(expense.amount);
    }
    spent
}
