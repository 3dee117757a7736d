//! Word/frequency metrics for lexreport.
//!
//! A small table of words and how often they occur, seeded once at startup
//! with [`DEFAULT_METRICS`] and read back with [`MetricStore::top`]. Report
//! generation never writes here.
//!
//! ```rust
//! use store::{seed_defaults, InMemoryMetricStore, MetricStore};
//!
//! let store = InMemoryMetricStore::new();
//! seed_defaults(&store).unwrap();
//! let top: Vec<String> = store.top(5).unwrap().into_iter().map(|r| r.word).collect();
//! assert_eq!(top, ["bacon", "beef", "pork", "filet", "ribs"]);
//! ```

mod backend;
mod error;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use crate::backend::{InMemoryMetricStore, MetricStore, RedbMetricStore, StoreConfig};
pub use crate::error::StoreError;

/// Records written by [`seed_defaults`], in insertion order.
pub const DEFAULT_METRICS: [(&str, u64); 5] = [
    ("bacon", 40),
    ("pork", 20),
    ("beef", 30),
    ("filet", 10),
    ("ribs", 5),
];

/// Number of records returned by the top-metrics query.
pub const TOP_METRICS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub id: u64,
    pub word: String,
    pub frequency: u64,
}

/// Inserts [`DEFAULT_METRICS`], skipping words already stored. Returns how
/// many records were created, so a second run returns 0.
pub fn seed_defaults(store: &dyn MetricStore) -> Result<usize, StoreError> {
    let mut inserted = 0;
    for (word, frequency) in DEFAULT_METRICS {
        if store.insert_if_absent(word, frequency)? {
            inserted += 1;
        }
    }
    info!(inserted, "seeded default metrics");
    Ok(inserted)
}
