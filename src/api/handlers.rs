//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

use crate::cache::{composite_key, CacheStore};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    FlushResponse, GetResponse, HealthResponse, SetRequest, SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The store is constructed explicitly and injected here rather than living
/// as a process-global; its lifetime is the lifetime of the service. The
/// store itself is single-threaded, so Tokio's RwLock serializes access to
/// it across request tasks.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache store holding JSON payloads
    pub cache: Arc<RwLock<CacheStore<Value>>>,
}

impl AppState {
    /// Creates a new AppState around the given cache store.
    pub fn new(cache: CacheStore<Value>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CacheStore::new(config.default_ttl_ms))
    }
}

/// Handler for PUT /set
///
/// Stores a JSON value in the cache under the request's effective key
/// (base key plus any named parameters), with an optional TTL.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let key = req.effective_key();

    let mut cache = state.cache.write().await;
    cache.set(key.clone(), req.value, req.ttl_ms);

    Ok(Json(SetResponse::new(key)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value from the cache. Query-string parameters, if present,
/// are folded into the effective key the same way `PUT /set` folds its
/// `params` map, so `GET /get/logs?level=a&service=b` looks up
/// `logs?level=a&service=b` regardless of parameter order.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Result<Json<GetResponse>> {
    let effective = if params.is_empty() {
        key
    } else {
        composite_key(&key, params.iter())
    };

    // Write lock: a read may lazily evict an expired entry
    let mut cache = state.cache.write().await;
    match cache.get_entry(&effective) {
        Some(entry) => {
            let ttl_remaining_ms = entry.ttl_remaining_ms();
            Ok(Json(GetResponse::new(effective, entry.value, ttl_remaining_ms)))
        }
        None => Err(ApiError::NotFound(effective)),
    }
}

/// Handler for DELETE /flush
///
/// Removes every entry from the cache unconditionally.
pub async fn flush_handler(State(state): State<AppState>) -> Json<FlushResponse> {
    let mut cache = state.cache.write().await;
    let cleared = cache.len();
    cache.clear();

    Json(FlushResponse::new(cleared))
}

/// Handler for GET /stats
///
/// Returns current cache statistics. The entry count includes stale entries
/// no read has evicted yet.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.expirations,
        stats.entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
