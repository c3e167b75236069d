//! Service layer for CapTrack
//!
//! Binds the in-memory ledger to its persistence backend.

pub mod tracker;

pub use tracker::Tracker;
