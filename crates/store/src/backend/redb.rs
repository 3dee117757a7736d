//! Persistent metric store on redb.
//!
//! Records live in one table keyed by word, holding `(id, frequency)`; the
//! next id lives in a small metadata table. Each insert runs in its own
//! write transaction, and redb admits one writer at a time, so the
//! existence check, id allocation and insert cannot interleave between
//! callers.

use std::path::Path;
use std::sync::Arc;

use redb::backends::InMemoryBackend;
use redb::{Database, ReadableTable, TableDefinition};
use tracing::debug;

use crate::{MetricRecord, MetricStore, StoreError};

const METRICS_TABLE: TableDefinition<&str, (u64, u64)> = TableDefinition::new("metrics");
const META_TABLE: TableDefinition<&str, u64> = TableDefinition::new("metrics_meta");
const NEXT_ID: &str = "next_id";

pub struct RedbMetricStore {
    db: Arc<Database>,
}

impl RedbMetricStore {
    /// Opens or creates the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = Database::create(path.as_ref()).map_err(StoreError::backend)?;
        debug!(path = %path.as_ref().display(), "opened metric store");
        Self::init(db)
    }

    /// A database that lives only as long as the store.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let db = Database::builder()
            .create_with_backend(InMemoryBackend::new())
            .map_err(StoreError::backend)?;
        Self::init(db)
    }

    fn init(db: Database) -> Result<Self, StoreError> {
        let write_txn = db.begin_write().map_err(StoreError::backend)?;
        {
            // Opening a table in a write transaction creates it.
            write_txn
                .open_table(METRICS_TABLE)
                .map_err(StoreError::backend)?;
            write_txn
                .open_table(META_TABLE)
                .map_err(StoreError::backend)?;
        }
        write_txn.commit().map_err(StoreError::backend)?;
        Ok(Self { db: Arc::new(db) })
    }
}

impl MetricStore for RedbMetricStore {
    fn insert_if_absent(&self, word: &str, frequency: u64) -> Result<bool, StoreError> {
        let write_txn = self.db.begin_write().map_err(StoreError::backend)?;
        let inserted = {
            let mut metrics = write_txn
                .open_table(METRICS_TABLE)
                .map_err(StoreError::backend)?;
            let exists = metrics
                .get(word)
                .map_err(StoreError::backend)?
                .is_some();
            if exists {
                false
            } else {
                let mut meta = write_txn
                    .open_table(META_TABLE)
                    .map_err(StoreError::backend)?;
                let id = meta
                    .get(NEXT_ID)
                    .map_err(StoreError::backend)?
                    .map(|guard| guard.value())
                    .unwrap_or(1);
                meta.insert(NEXT_ID, id + 1).map_err(StoreError::backend)?;
                metrics
                    .insert(word, (id, frequency))
                    .map_err(StoreError::backend)?;
                true
            }
        };
        write_txn.commit().map_err(StoreError::backend)?;
        Ok(inserted)
    }

    fn all(&self) -> Result<Vec<MetricRecord>, StoreError> {
        let read_txn = self.db.begin_read().map_err(StoreError::backend)?;
        let table = read_txn
            .open_table(METRICS_TABLE)
            .map_err(StoreError::backend)?;

        let mut records = Vec::new();
        for item in table.iter().map_err(StoreError::backend)? {
            let (word, value) = item.map_err(StoreError::backend)?;
            let (id, frequency) = value.value();
            records.push(MetricRecord {
                id,
                word: word.value().to_string(),
                frequency,
            });
        }
        records.sort_by_key(|record| record.id);
        Ok(records)
    }
}
