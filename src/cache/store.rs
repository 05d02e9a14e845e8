//! Cache Store Module
//!
//! Main cache engine: a HashMap of TTL-stamped entries with lazy eviction.
//! Entries leave the map only through `clear` or through a `get` that finds
//! them expired; there is no background sweeper and no capacity bound.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, DEFAULT_TTL_MS};

// == Cache Store ==
/// In-memory keyed cache with per-entry TTL and lazy eviction.
///
/// Generic over the stored value type; call sites that need JSON payloads
/// instantiate it at `serde_json::Value`. All operations are total: a read
/// of a missing or expired key yields `None`, never an error.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in milliseconds applied when a set does not specify one
    default_ttl_ms: u64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given default TTL in milliseconds.
    pub fn new(default_ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl_ms,
        }
    }

    // == Set ==
    /// Stores a value under `key` with an optional TTL in milliseconds.
    ///
    /// An existing entry is silently overwritten, value and TTL both; there
    /// is no merging. `None` uses the store's default TTL.
    pub fn set(&mut self, key: String, value: V, ttl_ms: Option<u64>) {
        let effective_ttl = ttl_ms.unwrap_or(self.default_ttl_ms);
        self.entries.insert(key, CacheEntry::new(value, effective_ttl));
        self.stats.set_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves the value for `key` if present and fresh.
    ///
    /// A read that finds an expired entry removes it before returning `None`
    /// (lazy eviction). A key that was never set returns `None` with no side
    /// effect beyond the miss counter.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_entry(key).map(|entry| entry.value)
    }

    // == Get Entry ==
    /// Like `get`, but returns the whole entry so callers can inspect the
    /// remaining TTL. Applies the same lazy eviction.
    pub fn get_entry(&mut self, key: &str) -> Option<CacheEntry<V>> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.set_entries(self.entries.len());
                self.stats.record_expiration();
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let entry = entry.clone();
                self.stats.record_hit();
                Some(entry)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Clear ==
    /// Removes all entries unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of entries currently held.
    ///
    /// Eviction is lazy, so this includes entries that have expired but have
    /// not been read since.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}
