//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::cache::composite_key;

/// Request body for the SET operation (PUT /set)
///
/// # Fields
/// - `key`: base cache key to store the value under
/// - `params`: optional flat parameter map folded into the effective key
/// - `value`: arbitrary JSON payload to store
/// - `ttl_ms`: optional TTL in milliseconds (uses default if not specified)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// Base cache key
    pub key: String,
    /// Optional named parameters disambiguating the key
    #[serde(default)]
    pub params: Option<BTreeMap<String, String>>,
    /// The value to store
    pub value: Value,
    /// Optional TTL in milliseconds
    #[serde(default)]
    pub ttl_ms: Option<u64>,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }

    /// Builds the effective cache key from the base key and parameters.
    pub fn effective_key(&self) -> String {
        match &self.params {
            Some(params) => composite_key(&self.key, params.iter()),
            None => self.key.clone(),
        }
    }
}
