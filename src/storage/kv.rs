//! Key-value persistence boundary
//!
//! The ledger persists three independent string entries. Anything that can
//! get and set strings by key can back it.

use std::collections::HashMap;

use crate::error::CapTrackResult;

/// A string key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> CapTrackResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> CapTrackResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> CapTrackResult<()>;

    /// Remove every entry
    fn clear(&mut self) -> CapTrackResult<()>;
}

/// Store that lives only in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CapTrackResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CapTrackResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CapTrackResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> CapTrackResult<()> {
        self.entries.clear();
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> CapTrackResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> CapTrackResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> CapTrackResult<()> {
        (**self).remove(key)
    }

    fn clear(&mut self) -> CapTrackResult<()> {
        (**self).clear()
    }
}
