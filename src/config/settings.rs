//! User settings for CapTrack
//!
//! Display preferences persisted as `config.json`. The theme is not a
//! setting here; it travels with the ledger snapshot.

use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

use super::paths::CapTrackPaths;
use crate::error::CapTrackError;
use crate::models::format_date;

/// User settings for CapTrack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many expenses the dashboard lists as recent
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_count() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_count: default_recent_count(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults on first run
    ///
    /// # Errors
    ///
    /// Returns `CapTrackError::Config` if the file cannot be parsed or its
    /// date format cannot render a calendar date.
    pub fn load_or_create(paths: &CapTrackPaths) -> Result<Self, CapTrackError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            let settings = Settings::default();
            settings.save(paths)?;
            tracing::debug!(path = %settings_path.display(), "wrote default settings");
            return Ok(settings);
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| CapTrackError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| CapTrackError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the date format can render a calendar date
    pub fn validate(&self) -> Result<(), CapTrackError> {
        if format_date(NaiveDate::default(), &self.date_format).is_none() {
            return Err(CapTrackError::Config(format!(
                "Invalid date_format '{}': use strftime date fields such as %Y-%m-%d",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CapTrackPaths) -> Result<(), CapTrackError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CapTrackError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CapTrackError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
