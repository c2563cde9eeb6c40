//! API Module
//!
//! HTTP handlers and routing for the factor service REST API.
//!
//! # Endpoints
//! - `POST /factors` - Divisor map for a set of integers
//! - `GET /stats` - Cache statistics
//! - `GET /keys` - Cached keys in recency order
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
