//! Directory-backed key-value store
//!
//! Each key is one `<key>.json` file inside the data directory, written
//! atomically.

use std::fs;
use std::path::PathBuf;

use crate::error::{CapTrackError, CapTrackResult};

use super::file_io::{read_string, remove_if_exists, write_string_atomic};
use super::kv::KeyValueStore;

const ENTRY_EXTENSION: &str = "json";

/// Key-value store persisting one file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: PathBuf) -> CapTrackResult<Self> {
        fs::create_dir_all(&dir).map_err(|e| {
            CapTrackError::Storage(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// File backing a key
    pub fn entry_path(&self, key: &str) -> CapTrackResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CapTrackError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.{}", key, ENTRY_EXTENSION)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CapTrackResult<Option<String>> {
        read_string(self.entry_path(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> CapTrackResult<()> {
        let path = self.entry_path(key)?;
        tracing::trace!(path = %path.display(), bytes = value.len(), "writing entry");
        write_string_atomic(path, value)
    }

    fn remove(&mut self, key: &str) -> CapTrackResult<()> {
        remove_if_exists(self.entry_path(key)?)
    }

    fn clear(&mut self) -> CapTrackResult<()> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(CapTrackError::Storage(format!(
                    "Failed to list {}: {}",
                    self.dir.display(),
                    e
                )))
            }
        };

        for entry in entries {
            let path = entry
                .map_err(|e| {
                    CapTrackError::Storage(format!("Failed to list {}: {}", self.dir.display(), e))
                })?
                .path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == ENTRY_EXTENSION) {
                remove_if_exists(&path)?;
            }
        }

        tracing::debug!(dir = %self.dir.display(), "cleared storage");
        Ok(())
    }
}
