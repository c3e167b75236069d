//! Configuration module for CapTrack
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CapTrackPaths;
pub use settings::Settings;
