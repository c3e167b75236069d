//! Expense store
//!
//! Ordered collection of expenses, newest first by insertion.

use chrono::NaiveDate;

use crate::error::{CapTrackError, CapTrackResult};
use crate::models::{CapitalId, Category, Expense, ExpenseId, Money};

use super::capitals::CapitalStore;

/// Criteria for narrowing the expense list
///
/// Every criterion that is set must match. The search term matches the note
/// or the category label, case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub search: Option<String>,
    pub capital_id: Option<CapitalId>,
    pub category: Option<Category>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_capital(mut self, capital_id: CapitalId) -> Self {
        self.capital_id = Some(capital_id);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.capital_id.is_none()
            && self.category.is_none()
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(capital_id) = self.capital_id {
            if expense.capital_id != capital_id {
                return false;
            }
        }

        if let Some(category) = self.category {
            if expense.category != category {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                expense.note.to_lowercase().contains(&term)
                    || expense.category.label().to_lowercase().contains(&term)
            }
            _ => true,
        }
    }
}

/// In-memory collection of expenses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-persisted records (newest first)
    pub fn from_vec(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Record a new expense at the head of the list
    ///
    /// Fails with a validation error, leaving the store untouched, when the
    /// amount is not positive or too large, the capital does not exist, or
    /// the capital's derived balance would no longer fit.
    pub fn add(
        &mut self,
        capitals: &CapitalStore,
        capital_id: CapitalId,
        amount: Money,
        category: Category,
        note: &str,
        date: NaiveDate,
    ) -> CapTrackResult<Expense> {
        let expense = Expense::new(capital_id, amount, category, note.trim(), date);
        expense
            .validate()
            .map_err(|e| CapTrackError::Validation(e.to_string()))?;

        let capital = capitals.get(capital_id).ok_or_else(|| {
            CapTrackError::Validation(format!("Unknown capital: {}", capital_id))
        })?;

        // The derived balance must stay representable
        let balance = self
            .expenses
            .iter()
            .filter(|e| e.capital_id == capital_id)
            .try_fold(amount, |drawn, e| drawn.checked_add(e.amount))
            .and_then(|drawn| capital.initial_balance.checked_sub(drawn));
        if balance.is_none() {
            return Err(CapTrackError::Validation(format!(
                "Expense of {} would overflow the balance of {}",
                amount, capital.name
            )));
        }

        self.expenses.insert(0, expense.clone());
        Ok(expense)
    }

    /// Remove an expense; returns false when no expense had this id
    pub fn delete(&mut self, id: ExpenseId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() != before
    }

    /// Remove every expense drawn against a capital, returning how many went
    pub fn remove_for_capital(&mut self, capital_id: CapitalId) -> usize {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.capital_id != capital_id);
        before - self.expenses.len()
    }

    /// Drop expenses whose capital is not in the given store
    pub(crate) fn retain_known(&mut self, capitals: &CapitalStore) -> usize {
        let before = self.expenses.len();
        self.expenses.retain(|e| capitals.contains(e.capital_id));
        before - self.expenses.len()
    }

    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Expenses matching the filter, in store order
    pub fn filter(&self, filter: &ExpenseFilter) -> Vec<&Expense> {
        self.expenses.iter().filter(|e| filter.matches(e)).collect()
    }

    /// The `limit` most recently added expenses
    pub fn recent(&self, limit: usize) -> &[Expense] {
        &self.expenses[..limit.min(self.expenses.len())]
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn setup() -> (CapitalStore, CapitalId, CapitalId) {
        let mut capitals = CapitalStore::new();
        let cash = capitals.add("Cash", Money::from_units(1000), "#000").unwrap().id;
        let bank = capitals.add("Bank", Money::from_units(5000), "#000").unwrap().id;
        (capitals, cash, bank)
    }

    #[test]
    fn test_add_inserts_newest_first() {
        let (capitals, cash, _) = setup();
        let mut store = ExpenseStore::new();

        let first = store
            .add(&capitals, cash, Money::from_cents(100), Category::Other, "first", date())
            .unwrap();
        let second = store
            .add(&capitals, cash, Money::from_cents(200), Category::Other, "second", date())
            .unwrap();

        assert_eq!(store.list()[0].id, second.id);
        assert_eq!(store.list()[1].id, first.id);
    }

    #[test]
    fn test_add_rejects_non_positive_amounts() {
        let (capitals, cash, _) = setup();
        let mut store = ExpenseStore::new();

        for cents in [0, -1000] {
            let err = store
                .add(&capitals, cash, Money::from_cents(cents), Category::Other, "", date())
                .unwrap_err();
            assert!(err.is_validation());
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_amounts_beyond_limit() {
        let (capitals, cash, _) = setup();
        let mut store = ExpenseStore::new();

        let err = store
            .add(&capitals, cash, Money::MAX + Money::from_cents(1), Category::Other, "", date())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_balance_overflow() {
        let (capitals, cash, _) = setup();
        let huge = Expense::new(cash, Money::from_cents(i64::MAX - 10), Category::Other, "", date());
        let mut store = ExpenseStore::from_vec(vec![huge]);

        let err = store
            .add(&capitals, cash, Money::from_cents(100), Category::Other, "", date())
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_rejects_unknown_capital() {
        let (capitals, _, _) = setup();
        let mut store = ExpenseStore::new();

        let err = store
            .add(&capitals, CapitalId::new(), Money::from_cents(100), Category::Other, "", date())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let (capitals, cash, _) = setup();
        let mut store = ExpenseStore::new();
        let expense = store
            .add(&capitals, cash, Money::from_cents(100), Category::Other, "", date())
            .unwrap();

        assert!(!store.delete(ExpenseId::new()));
        assert_eq!(store.len(), 1);
        assert!(store.delete(expense.id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_filter_by_search_capital_and_category() {
        let (capitals, cash, bank) = setup();
        let mut store = ExpenseStore::new();
        store.add(&capitals, cash, Money::from_cents(100), Category::FoodAndDining, "Coffee", date()).unwrap();
        store.add(&capitals, bank, Money::from_cents(200), Category::BillsAndUtilities, "Electric", date()).unwrap();
        store.add(&capitals, cash, Money::from_cents(300), Category::Shopping, "Shoes", date()).unwrap();

        let by_note = store.filter(&ExpenseFilter::new().with_search("COFFEE"));
        assert_eq!(by_note.len(), 1);
        assert_eq!(by_note[0].note, "Coffee");

        // search also hits the category label
        let by_label = store.filter(&ExpenseFilter::new().with_search("utilities"));
        assert_eq!(by_label.len(), 1);
        assert_eq!(by_label[0].note, "Electric");

        let by_capital = store.filter(&ExpenseFilter::new().with_capital(cash));
        let notes: Vec<_> = by_capital.iter().map(|e| e.note.as_str()).collect();
        assert_eq!(notes, vec!["Shoes", "Coffee"]);

        let combined = store.filter(
            &ExpenseFilter::new()
                .with_capital(cash)
                .with_category(Category::Shopping),
        );
        assert_eq!(combined.len(), 1);

        let none = store.filter(&ExpenseFilter::new().with_capital(bank).with_search("shoes"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let (capitals, cash, bank) = setup();
        let mut store = ExpenseStore::new();
        store.add(&capitals, cash, Money::from_cents(100), Category::Other, "a", date()).unwrap();
        store.add(&capitals, bank, Money::from_cents(200), Category::Health, "b", date()).unwrap();

        let filter = ExpenseFilter::new().with_search("   ");
        assert!(filter.is_empty());
        let all: Vec<Expense> = store.filter(&filter).into_iter().cloned().collect();
        assert_eq!(all.as_slice(), store.list());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let (capitals, cash, bank) = setup();
        let mut store = ExpenseStore::new();
        store.add(&capitals, cash, Money::from_cents(100), Category::Health, "pharmacy", date()).unwrap();
        store.add(&capitals, bank, Money::from_cents(200), Category::Health, "dentist", date()).unwrap();
        store.add(&capitals, cash, Money::from_cents(300), Category::Other, "misc", date()).unwrap();

        let filter = ExpenseFilter::new().with_category(Category::Health);
        let once: Vec<Expense> = store.filter(&filter).into_iter().cloned().collect();
        let twice = ExpenseStore::from_vec(once.clone());
        let twice: Vec<Expense> = twice.filter(&filter).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_for_capital_and_recent() {
        let (capitals, cash, bank) = setup();
        let mut store = ExpenseStore::new();
        store.add(&capitals, cash, Money::from_cents(100), Category::Other, "", date()).unwrap();
        store.add(&capitals, bank, Money::from_cents(200), Category::Other, "", date()).unwrap();
        store.add(&capitals, cash, Money::from_cents(300), Category::Other, "", date()).unwrap();

        assert_eq!(store.recent(2).len(), 2);
        assert_eq!(store.recent(10).len(), 3);

        assert_eq!(store.remove_for_capital(cash), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].capital_id, bank);
    }
}
