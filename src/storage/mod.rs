//! Storage layer for CapTrack
//!
//! Persists the ledger snapshot through a string key-value interface, with
//! an atomic-write file backend and an in-memory backend.

pub mod file_io;
pub mod file_store;
pub mod kv;
pub mod snapshot;

pub use file_store::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use snapshot::{load_state, reset, save_state, save_theme, LoadOutcome};
