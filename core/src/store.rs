use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::DayRecord;

/// Day-keyed store persisted as a single pretty-printed JSON file.
///
/// The file maps ISO-8601 dates to day records, sorted by key. It is loaded
/// once at startup and rewritten in full on every mutating action; the last
/// successful rewrite wins.
pub struct DayStore {
    path: PathBuf,
    days: BTreeMap<String, DayRecord>,
}

impl DayStore {
    /// Open the store at `path`. A missing file yields an empty store; an
    /// unreadable or corrupt file yields an empty store with a warning on
    /// stderr. Never fatal.
    #[must_use]
    pub fn open(path: &Path) -> Self {
        let days = match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(days) => days,
                Err(e) => {
                    eprintln!("Warning: could not parse {}: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                eprintln!("Warning: could not read {}: {e}", path.display());
                BTreeMap::new()
            }
        };
        DayStore {
            path: path.to_path_buf(),
            days,
        }
    }

    /// Rewrite the whole file.
    pub fn save(&self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.days)?;
        fs::write(&self.path, payload)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.get(&date.to_string())
    }

    /// Today's (or any day's) record, created zeroed on first touch.
    pub fn day_mut(&mut self, date: NaiveDate) -> &mut DayRecord {
        self.days.entry(date.to_string()).or_default()
    }

    /// Recorded dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
