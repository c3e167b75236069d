//! Path management for CapTrack
//!
//! ## Path Resolution Order
//!
//! 1. `CAPTRACK_DATA_DIR` environment variable (if set)
//! 2. The platform data directory from `directories`
//!    (e.g. `~/.local/share/captrack` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CapTrackError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CAPTRACK_DATA_DIR";

/// Manages all paths used by CapTrack
#[derive(Debug, Clone)]
pub struct CapTrackPaths {
    base_dir: PathBuf,
}

impl CapTrackPaths {
    /// Resolve paths from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, CapTrackError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the persisted key-value entries
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), CapTrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CapTrackError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CapTrackError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, CapTrackError> {
    ProjectDirs::from("", "", "captrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CapTrackError::Config("Could not determine a data directory".into()))
}
