//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cache entry: the stored value plus its freshness window.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion timestamp (Unix milliseconds)
    pub stored_at: u64,
    /// Milliseconds after `stored_at` during which the entry is fresh
    pub ttl_ms: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: V, ttl_ms: u64) -> Self {
        Self {
            value,
            stored_at: current_timestamp_ms(),
            ttl_ms,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry's TTL has elapsed.
    ///
    /// Boundary condition: the entry is fresh while `now - stored_at < ttl_ms`
    /// and expired the instant the full TTL has elapsed, so an entry with
    /// `ttl_ms == 0` is expired immediately.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms().saturating_sub(self.stored_at) >= self.ttl_ms
    }

    // == Time To Live ==
    /// Returns the remaining freshness window in milliseconds.
    ///
    /// Returns 0 once the entry has expired. Useful for API responses and
    /// debugging; the cache itself only consults `is_expired`.
    pub fn ttl_remaining_ms(&self) -> u64 {
        let elapsed = current_timestamp_ms().saturating_sub(self.stored_at);
        self.ttl_ms.saturating_sub(elapsed)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value".to_string(), 60_000);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.ttl_ms, 60_000);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        // Create entry with 50 ms TTL
        let entry = CacheEntry::new("test_value".to_string(), 50);

        assert!(!entry.is_expired());

        // Wait for expiration
        sleep(Duration::from_millis(80));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = CacheEntry::new("test_value".to_string(), 10_000);

        let remaining = entry.ttl_remaining_ms();
        assert!(remaining <= 10_000);
        assert!(remaining >= 9_000);
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let entry = CacheEntry::new("test_value".to_string(), 10);

        sleep(Duration::from_millis(40));

        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // TTL of zero expires the instant it is stored
        let entry = CacheEntry::new("test".to_string(), 0);

        assert!(entry.is_expired(), "Entry should be expired at boundary");
        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[test]
    fn test_entry_holds_arbitrary_value_type() {
        let entry = CacheEntry::new(vec![1u32, 2, 3], 1_000);
        assert_eq!(entry.value, vec![1, 2, 3]);
    }
}
