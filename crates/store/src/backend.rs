use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::{MetricRecord, StoreError};

/// Storage for word/frequency records.
///
/// Words are unique. Ids are assigned in insertion order starting at 1 and
/// never reused.
pub trait MetricStore: Send + Sync {
    /// Stores `word` unless it is already present. Returns whether a record
    /// was created; an existing record is left untouched.
    fn insert_if_absent(&self, word: &str, frequency: u64) -> Result<bool, StoreError>;

    /// Every record, ordered by id.
    fn all(&self) -> Result<Vec<MetricRecord>, StoreError>;

    /// The `limit` records with the highest frequency; ties keep insertion
    /// order.
    fn top(&self, limit: usize) -> Result<Vec<MetricRecord>, StoreError> {
        let mut records = self.all()?;
        records.sort_by(|a, b| b.frequency.cmp(&a.frequency).then(a.id.cmp(&b.id)));
        records.truncate(limit);
        Ok(records)
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.all()?.len())
    }
}

/// Which backend to build.
///
/// ```
/// use store::StoreConfig;
///
/// let memory = StoreConfig::in_memory();
/// let file = StoreConfig::redb("/var/lib/lexreport/metrics.redb");
/// assert_ne!(memory, file);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StoreConfig {
    /// A redb database file, created if missing.
    Redb { path: String },
    #[default]
    InMemory,
}

impl StoreConfig {
    pub fn in_memory() -> Self {
        StoreConfig::InMemory
    }

    pub fn redb<P: Into<String>>(path: P) -> Self {
        StoreConfig::Redb { path: path.into() }
    }

    pub fn build(&self) -> Result<Box<dyn MetricStore>, StoreError> {
        match self {
            StoreConfig::InMemory => Ok(Box::new(InMemoryMetricStore::new())),
            StoreConfig::Redb { path } => Ok(Box::new(RedbMetricStore::open(path)?)),
        }
    }
}

#[derive(Default)]
struct Records {
    by_word: HashMap<String, MetricRecord>,
    next_id: u64,
}

/// A `RwLock<HashMap>` store for tests and throwaway runs.
#[derive(Default)]
pub struct InMemoryMetricStore {
    records: RwLock<Records>,
}

impl InMemoryMetricStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricStore for InMemoryMetricStore {
    fn insert_if_absent(&self, word: &str, frequency: u64) -> Result<bool, StoreError> {
        // Check and insert under one write lock.
        let mut guard = self
            .records
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        if guard.by_word.contains_key(word) {
            return Ok(false);
        }
        guard.next_id += 1;
        let record = MetricRecord {
            id: guard.next_id,
            word: word.to_string(),
            frequency,
        };
        guard.by_word.insert(record.word.clone(), record);
        Ok(true)
    }

    fn all(&self) -> Result<Vec<MetricRecord>, StoreError> {
        let guard = self
            .records
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        let mut records: Vec<MetricRecord> = guard.by_word.values().cloned().collect();
        records.sort_by_key(|record| record.id);
        Ok(records)
    }

    fn len(&self) -> Result<usize, StoreError> {
        let guard = self
            .records
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard.by_word.len())
    }
}

pub mod redb;

pub use self::redb::RedbMetricStore;
