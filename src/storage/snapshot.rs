//! Ledger snapshot persistence
//!
//! Serializes the capital and expense collections and the theme preference
//! into three independent key-value entries.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{CapTrackError, CapTrackResult};
use crate::ledger::AppState;
use crate::models::{Capital, Expense, Theme};

use super::kv::KeyValueStore;

pub const CAPITALS_KEY: &str = "captrack_capitals";
pub const EXPENSES_KEY: &str = "captrack_expenses";
pub const THEME_KEY: &str = "captrack_theme";

/// Whether state was read from storage or freshly seeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    FirstRun,
}

/// Load ledger state from the store
///
/// Without a persisted capital collection this is a first run and the
/// default capitals are seeded. A missing expense collection loads empty.
pub fn load_state<S: KeyValueStore + ?Sized>(store: &S) -> CapTrackResult<(AppState, LoadOutcome)> {
    let theme = store
        .get(THEME_KEY)?
        .map(|value| Theme::from_stored(&value))
        .unwrap_or_default();

    let Some(capitals_json) = store.get(CAPITALS_KEY)? else {
        let mut state = AppState::seeded();
        state.set_theme(theme);
        return Ok((state, LoadOutcome::FirstRun));
    };

    let capitals: Vec<Capital> = decode(CAPITALS_KEY, &capitals_json)?;
    let expenses: Vec<Expense> = match store.get(EXPENSES_KEY)? {
        Some(json) => decode(EXPENSES_KEY, &json)?,
        None => Vec::new(),
    };

    Ok((
        AppState::from_parts(capitals, expenses, theme),
        LoadOutcome::Loaded,
    ))
}

/// Write both collections and the theme
pub fn save_state<S: KeyValueStore + ?Sized>(store: &mut S, state: &AppState) -> CapTrackResult<()> {
    store.set(CAPITALS_KEY, &encode(state.capitals())?)?;
    store.set(EXPENSES_KEY, &encode(state.expenses())?)?;
    save_theme(store, state.theme())
}

pub fn save_theme<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) -> CapTrackResult<()> {
    store.set(THEME_KEY, theme.as_str())
}

/// Wipe every persisted entry and return to first-run state
///
/// The seeded state is written back immediately.
pub fn reset<S: KeyValueStore + ?Sized>(store: &mut S) -> CapTrackResult<AppState> {
    store.clear()?;
    let state = AppState::seeded();
    store.set(CAPITALS_KEY, &encode(state.capitals())?)?;
    store.set(EXPENSES_KEY, &encode(state.expenses())?)?;
    Ok(state)
}

fn encode<T: Serialize + ?Sized>(value: &T) -> CapTrackResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CapTrackError::Storage(format!("Failed to serialize data: {}", e)))
}

fn decode<T: DeserializeOwned>(key: &str, json: &str) -> CapTrackResult<T> {
    serde_json::from_str(json)
        .map_err(|e| CapTrackError::Storage(format!("Failed to parse '{}': {}", key, e)))
}
