//! API Module
//!
//! HTTP handlers and routing for the cache service REST API.
//!
//! # Endpoints
//! - `PUT /set` - Store a value under a key with optional TTL
//! - `GET /get/:key` - Retrieve a value (query params fold into the key)
//! - `DELETE /flush` - Clear the cache
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
