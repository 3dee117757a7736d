use std::borrow::Borrow;
use std::hash::Hash;

use fxhash::FxHashMap;
use serde::Serialize;

/// Exact occurrence counts over a discrete key space.
///
/// Keys are kept in the order they were first added. That order is the
/// tie-break for [`FreqDist::most_common`], so two keys with the same count
/// are ranked by which one appeared first in the token stream.
#[derive(Debug, Clone)]
pub struct FreqDist<K> {
    entries: Vec<(K, u64)>,
    index: FxHashMap<K, usize>,
    total: u64,
}

/// One ranked row of a distribution.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Ranked<'a, K> {
    pub key: &'a K,
    pub count: u64,
}

impl<K: Eq + Hash + Clone> FreqDist<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
            total: 0,
        }
    }

    /// Counts one more occurrence of `key`.
    pub fn add(&mut self, key: K) {
        self.total += 1;
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 += 1;
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, 1));
    }

    /// Occurrences of `key`, zero when it was never seen.
    pub fn count<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Sum of all counts, i.e. the number of items that were added.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-encountered order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    /// The `k` most frequent keys, highest count first.
    ///
    /// Returns `min(k, self.len())` rows; asking for more keys than exist is
    /// not an error.
    pub fn most_common(&self, k: usize) -> Vec<Ranked<'_, K>> {
        let mut ranked: Vec<Ranked<'_, K>> = self
            .entries
            .iter()
            .map(|(key, count)| Ranked { key, count: *count })
            .collect();
        // Stable: equal counts keep first-encountered order.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(k);
        ranked
    }
}

impl<K: PartialEq> PartialEq for FreqDist<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq> Eq for FreqDist<K> {}

impl<K: Eq + Hash + Clone> Default for FreqDist<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FreqDist<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut dist = Self::new();
        dist.extend(iter);
        dist
    }
}

impl<K: Eq + Hash + Clone> Extend<K> for FreqDist<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}
