//! Recent-projects ledger.
//!
//! Persists a JSON array of [`RecentEntry`] at `<config_dir>/recent.json`,
//! most recent first, at most [`MAX_RECENT`] entries, one entry per project
//! path. A missing or unreadable file is treated as an empty history.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::StoreError;
use crate::paths::RECENT_FILE;
use crate::store::write_json_atomic;
use crate::types::RecentEntry;

pub const MAX_RECENT: usize = 20;

#[derive(Debug, Clone)]
pub struct RecentLedger {
    path: PathBuf,
}

impl RecentLedger {
    /// Ledger stored in `config_dir`.
    pub fn in_dir(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(RECENT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored entries in order. Entries that do not decode are skipped one
    /// at a time; empty when the file is missing or corrupt.
    pub fn list(&self) -> Vec<RecentEntry> {
        self.load_raw()
            .into_iter()
            .filter_map(|value| match serde_json::from_value(value) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::debug!(path = %self.path.display(), error = %err, "skipping unreadable recent entry");
                    None
                }
            })
            .collect()
    }

    /// Put `entry` at the front, dropping any older entry for the same path.
    /// Other stored entries are written back untouched.
    pub fn add(&self, entry: RecentEntry) -> Result<(), StoreError> {
        let entry = serde_json::to_value(&entry)?;
        let mut entries = self.load_raw();
        entries.retain(|e| e.get("path") != entry.get("path"));
        entries.insert(0, entry);
        entries.truncate(MAX_RECENT);
        write_json_atomic(&self.path, &entries)
    }

    /// The stored array as raw JSON values.
    fn load_raw(&self) -> Vec<Value> {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str(&contents) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(path = %self.path.display(), error = %err, "ignoring corrupt recent list");
                Vec::new()
            }
        }
    }
}
