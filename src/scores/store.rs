//! Key/value persistence for the high-score list.
//!
//! The list lives under a single key as a JSON array. Reads never fail: a
//! missing key, an unreadable backend or malformed JSON all give an empty
//! list. Writes report errors so the caller can tell the player.

use std::path::PathBuf;

use log::{debug, warn};
use rustc_hash::FxHashMap;

use super::entry::HighScoreEntry;
use super::table::HighScoreTable;
use crate::core::StoreError;

/// Key the high-score list is stored under.
pub const HIGH_SCORES_KEY: &str = "memoryHighScores";

/// Minimal string key/value storage.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key inside a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };
        std::fs::create_dir_all(&self.dir).map_err(io_err)?;
        std::fs::write(self.path_for(key), value).map_err(io_err)
    }
}

/// High-score list backed by a `KeyValueStore`.
pub struct HighScoreStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> HighScoreStore<S> {
    #[must_use]
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Current list. Empty if nothing usable is stored.
    #[must_use]
    pub fn load(&self) -> HighScoreTable {
        let raw = match self.backend.get(HIGH_SCORES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return HighScoreTable::new(),
            Err(e) => {
                warn!("could not read high scores, starting empty: {e}");
                return HighScoreTable::new();
            }
        };

        match serde_json::from_str::<Vec<HighScoreEntry>>(&raw) {
            Ok(entries) => HighScoreTable::from_entries(entries),
            Err(e) => {
                warn!("discarding malformed high scores: {e}");
                HighScoreTable::new()
            }
        }
    }

    /// Add a result and persist the list.
    ///
    /// Returns the entry's 0-based rank, or `None` if it did not make the list.
    pub fn record(&mut self, entry: HighScoreEntry) -> Result<Option<usize>, StoreError> {
        let mut table = self.load();
        let rank = table.insert(entry);

        let json = serde_json::to_string(&table)?;
        self.backend.set(HIGH_SCORES_KEY, &json)?;
        debug!("stored {} high scores, new entry rank {:?}", table.len(), rank);

        Ok(rank)
    }
}
