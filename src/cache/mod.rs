//! Cache Module
//!
//! Provides in-memory caching with per-entry TTL and lazy eviction.

mod entry;
mod key;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::composite_key;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// TTL applied when a set does not specify one (milliseconds)
pub const DEFAULT_TTL_MS: u64 = 60_000;
