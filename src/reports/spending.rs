//! Spending Report
//!
//! Totals expenses per category in a single pass.

use std::collections::HashMap;

use crate::models::{Category, Expense, Money};

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    pub category: Category,
    /// Sum of expense amounts in this category
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Share of total spending (0-100)
    pub percentage: f64,
}

/// Spending breakdown across all expenses
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingReport {
    /// Categories with spending, largest first
    pub categories: Vec<SpendingByCategory>,
    /// Sum of all expense amounts
    pub total_spent: Money,
    pub transaction_count: usize,
}

impl SpendingReport {
    pub fn generate(expenses: &[Expense]) -> Self {
        let mut by_category: HashMap<Category, (Money, usize)> = HashMap::new();
        let mut total_spent = Money::zero();

        for expense in expenses {
            let entry = by_category
                .entry(expense.category)
                .or_insert((Money::zero(), 0));
            entry.0 = entry.0.saturating_add(expense.amount);
            entry.1 += 1;
            total_spent = total_spent.saturating_add(expense.amount);
        }

        let mut categories: Vec<SpendingByCategory> = by_category
            .into_iter()
            .map(|(category, (total, count))| SpendingByCategory {
                category,
                total,
                count,
                percentage: percentage_of(total, total_spent),
            })
            .collect();

        // Largest first; ties fall back to the fixed category order
        categories.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        Self {
            categories,
            total_spent,
            transaction_count: expenses.len(),
        }
    }

    /// Total for one category (zero if it has no spending)
    pub fn total_for(&self, category: Category) -> Money {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// `part` as a percentage of `whole`; zero when `whole` is zero
pub(crate) fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}
