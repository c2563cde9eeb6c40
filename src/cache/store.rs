//! Cache Store Module
//!
//! Bounded key-value store combining a HashMap index with the recency list.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheKey, CacheStats, RecencyList};

// == Cache Store ==
/// Fixed-capacity store with strict LRU eviction.
///
/// `index` maps every key to its node handle in `recency`; the two always hold
/// exactly the same key set. A capacity of 0 disables the store: lookups
/// always miss and inserts are dropped.
#[derive(Debug)]
pub struct CacheStore {
    /// Key to recency-list handle
    index: HashMap<CacheKey, usize>,
    /// Entries in MRU to LRU order
    recency: RecencyList,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            recency: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(capacity),
            capacity,
        }
    }

    // == Lookup ==
    /// Returns the entry for `key`, promoting it to most recently used.
    pub fn lookup(&mut self, key: &CacheKey) -> Option<CacheEntry> {
        let Some(&idx) = self.index.get(key) else {
            self.stats.record_miss();
            return None;
        };

        self.recency.promote(idx);
        self.stats.record_hit();
        self.recency.entry(idx).cloned()
    }

    // == Insert ==
    /// Stores `entry` under `key` as the most recently used entry.
    ///
    /// If the cache is at capacity, the least recently used entry is evicted
    /// first. An existing key has its entry replaced and is promoted without
    /// evicting anything.
    pub fn insert(&mut self, key: CacheKey, entry: CacheEntry) {
        if self.capacity == 0 {
            return;
        }

        if let Some(&idx) = self.index.get(&key) {
            debug!(key = %key, "replacing existing cache entry");
            self.recency.replace(idx, entry);
            self.recency.promote(idx);
            return;
        }

        if self.index.len() >= self.capacity {
            self.evict_lru();
        }

        let idx = self.recency.push_front(key.clone(), entry);
        self.index.insert(key, idx);
        self.stats.record_insertion();
        self.stats.set_total_entries(self.index.len());
    }

    fn evict_lru(&mut self) {
        if let Some((evicted, _)) = self.recency.pop_back() {
            self.index.remove(&evicted);
            self.stats.record_eviction();
            debug!(key = %evicted, "evicted least recently used entry");
        }
    }

    // == Introspection ==
    /// Checks for `key` without promoting it or touching the stats.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the entry for `key` without promoting it or touching the stats.
    pub fn peek(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.index
            .get(key)
            .and_then(|&idx| self.recency.entry(idx))
            .cloned()
    }

    /// Keys ordered from most to least recently used.
    pub fn recency_keys(&self) -> Vec<CacheKey> {
        self.recency.keys().cloned().collect()
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.index.len());
        stats
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
