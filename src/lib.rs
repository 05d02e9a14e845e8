//! Memocache - an in-memory TTL cache with lazy eviction
//!
//! Stores arbitrary values under string keys with a per-entry time-to-live.
//! Expired entries are removed when a read discovers them; there is no
//! background sweeper.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use config::Config;
