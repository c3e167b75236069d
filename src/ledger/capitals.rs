//! Capital store
//!
//! Ordered collection of capitals; insertion order is display order.

use crate::error::{CapTrackError, CapTrackResult};
use crate::models::{Capital, CapitalId, Money, DEFAULT_CAPITAL_COLOR};

/// In-memory collection of capitals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapitalStore {
    capitals: Vec<Capital>,
}

impl CapitalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-persisted records, keeping their order
    pub fn from_vec(capitals: Vec<Capital>) -> Self {
        Self { capitals }
    }

    /// Create and append a new capital
    ///
    /// The new capital starts with `current_balance == initial_balance`.
    pub fn add(
        &mut self,
        name: &str,
        initial_balance: Money,
        color: &str,
    ) -> CapTrackResult<Capital> {
        let color = match color.trim() {
            "" => DEFAULT_CAPITAL_COLOR,
            color => color,
        };
        let capital = Capital::new(name.trim(), initial_balance, color);
        capital
            .validate()
            .map_err(|e| CapTrackError::Validation(e.to_string()))?;

        self.capitals.push(capital.clone());
        Ok(capital)
    }

    /// Remove a capital; returns false when no capital had this id
    pub fn delete(&mut self, id: CapitalId) -> bool {
        let before = self.capitals.len();
        self.capitals.retain(|c| c.id != id);
        self.capitals.len() != before
    }

    pub fn list(&self) -> &[Capital] {
        &self.capitals
    }

    pub fn get(&self, id: CapitalId) -> Option<&Capital> {
        self.capitals.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: CapitalId) -> bool {
        self.get(id).is_some()
    }

    /// Find a capital by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&Capital> {
        let name_lower = name.trim().to_lowercase();
        self.capitals
            .iter()
            .find(|c| c.name.to_lowercase() == name_lower)
    }

    pub fn len(&self) -> usize {
        self.capitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capitals.is_empty()
    }

    /// Swap in a freshly derived capital list
    pub(crate) fn replace_all(&mut self, capitals: Vec<Capital>) {
        self.capitals = capitals;
    }
}
