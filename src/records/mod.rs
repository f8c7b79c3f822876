//! Best-record persistence.
//!
//! One integer per topic: the fewest moves a finished game has taken. Read
//! when the player picks a topic, written at win time, and only when the
//! new count is strictly better.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::core::EngineError;

/// Durable store of best-moves records, keyed by topic.
pub trait RecordStore {
    /// Current record for a topic, if any.
    fn best(&self, topic: &str) -> Option<u32>;

    /// Record `moves` if it beats the stored value (or none is stored).
    /// Returns whether a new record was set; persists exactly then.
    fn record_if_better(&mut self, topic: &str, moves: u32) -> Result<bool, EngineError>;
}

fn is_better(current: Option<u32>, moves: u32) -> bool {
    match current {
        None => true,
        Some(best) => moves < best,
    }
}

/// Volatile store for tests and previews.
#[derive(Clone, Debug, Default)]
pub struct MemoryRecordStore {
    records: FxHashMap<String, u32>,
}

impl MemoryRecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryRecordStore {
    fn best(&self, topic: &str) -> Option<u32> {
        self.records.get(topic).copied()
    }

    fn record_if_better(&mut self, topic: &str, moves: u32) -> Result<bool, EngineError> {
        if !is_better(self.best(topic), moves) {
            return Ok(false);
        }
        self.records.insert(topic.to_string(), moves);
        Ok(true)
    }
}

/// JSON-file store, write-through on every new record.
///
/// The file holds a flat `{"topic": moves}` map. A missing file means no
/// records yet; it is created on the first write.
#[derive(Debug)]
pub struct FileRecordStore {
    path: PathBuf,
    records: FxHashMap<String, u32>,
}

impl FileRecordStore {
    /// Open a store at `path`, loading any existing records.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, EngineError> {
        let path = path.into();
        let records = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            FxHashMap::default()
        };
        Ok(Self { path, records })
    }

    /// Open the store at the platform default location
    /// (`<data dir>/memoria/records.json`).
    pub fn open_default() -> Result<Self, EngineError> {
        let base = dirs::data_dir().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no platform data directory",
            )
        })?;
        Self::open(base.join("memoria").join("records.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), EngineError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl RecordStore for FileRecordStore {
    fn best(&self, topic: &str) -> Option<u32> {
        self.records.get(topic).copied()
    }

    fn record_if_better(&mut self, topic: &str, moves: u32) -> Result<bool, EngineError> {
        if !is_better(self.best(topic), moves) {
            return Ok(false);
        }
        self.records.insert(topic.to_string(), moves);
        self.persist()?;
        log::info!("new best for {}: {} moves", topic, moves);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_result_is_a_record() {
        let mut store = MemoryRecordStore::new();
        assert_eq!(store.best("Biologia"), None);
        assert!(store.record_if_better("Biologia", 14).unwrap());
        assert_eq!(store.best("Biologia"), Some(14));
    }

    #[test]
    fn test_only_strictly_better_updates() {
        let mut store = MemoryRecordStore::new();
        store.record_if_better("Quimica", 12).unwrap();

        assert!(!store.record_if_better("Quimica", 12).unwrap());
        assert!(!store.record_if_better("Quimica", 20).unwrap());
        assert_eq!(store.best("Quimica"), Some(12));

        assert!(store.record_if_better("Quimica", 11).unwrap());
        assert_eq!(store.best("Quimica"), Some(11));
    }

    #[test]
    fn test_topics_tracked_independently() {
        let mut store = MemoryRecordStore::new();
        store.record_if_better("Fisica", 10).unwrap();
        store.record_if_better("Quimica", 30).unwrap();

        assert_eq!(store.best("Fisica"), Some(10));
        assert_eq!(store.best("Quimica"), Some(30));
    }
}
