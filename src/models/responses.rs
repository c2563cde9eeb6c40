//! Response DTOs for the factor API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::sync::Arc;

use serde::Serialize;

use crate::cache::{CacheKey, CacheStats, DivisorMap};
use crate::factor::{CacheOutcome, Factorization};

/// Response body for POST /factors
#[derive(Debug, Clone, Serialize)]
pub struct FactorResponse {
    /// Canonical cache key, absent for empty input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<CacheKey>,
    /// Divisors per input integer
    pub divisors: Arc<DivisorMap>,
    /// Whether the result was served from the cache
    pub cached: bool,
}

impl From<Factorization> for FactorResponse {
    fn from(result: Factorization) -> Self {
        Self {
            key: result.key,
            divisors: result.divisors,
            cached: result.outcome == CacheOutcome::Hit,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self { stats, hit_rate }
    }
}

/// Response body for GET /keys
#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    /// Cached keys, most recently used first
    pub keys: Vec<CacheKey>,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
