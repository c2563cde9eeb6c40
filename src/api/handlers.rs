//! API Handlers
//!
//! HTTP request handlers for each factor service endpoint.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{extract::State, Json};

use crate::error::Result;
use crate::factor::FactorService;
use crate::models::{FactorRequest, FactorResponse, HealthResponse, KeysResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The service sits behind a single mutex: lookup promotes and insert evicts,
/// so every request holds the lock for its whole consult/populate cycle.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Mutex<FactorService>>,
}

impl AppState {
    /// Creates a new AppState owning the given service.
    pub fn new(service: FactorService) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(FactorService::with_capacity(config.cache_capacity))
    }
}

/// Handler for POST /factors
///
/// Returns the divisor map for the submitted numbers, computing it on a miss.
pub async fn factors_handler(
    State(state): State<AppState>,
    Json(req): Json<FactorRequest>,
) -> Result<Json<FactorResponse>> {
    let numbers = req.integers()?;

    let mut service = state.service.lock().await;
    let result = service.factorize(&numbers)?;

    Ok(Json(FactorResponse::from(result)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let service = state.service.lock().await;
    Json(StatsResponse::from(service.stats()))
}

/// Handler for GET /keys
///
/// Lists cached keys from most to least recently used.
pub async fn keys_handler(State(state): State<AppState>) -> Json<KeysResponse> {
    let service = state.service.lock().await;
    Json(KeysResponse {
        keys: service.recency_keys(),
    })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(numbers: serde_json::Value) -> Json<FactorRequest> {
        Json(serde_json::from_value(json!({ "numbers": numbers })).unwrap())
    }

    #[tokio::test]
    async fn test_factors_handler_miss_then_hit() {
        let state = AppState::new(FactorService::with_capacity(4));

        let first = factors_handler(State(state.clone()), request(json!([4, 2])))
            .await
            .unwrap();
        assert!(!first.cached);
        assert_eq!(first.divisors.get(&4), Some(&vec![2]));

        let second = factors_handler(State(state.clone()), request(json!([2, 4])))
            .await
            .unwrap();
        assert!(second.cached);
    }

    #[tokio::test]
    async fn test_factors_handler_invalid() {
        let state = AppState::new(FactorService::with_capacity(4));

        let result = factors_handler(State(state.clone()), request(json!([0, 5]))).await;
        assert!(result.is_err());

        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.stats.total_entries, 0);
    }

    #[tokio::test]
    async fn test_keys_handler_order() {
        let state = AppState::new(FactorService::with_capacity(4));
        for numbers in [json!([1]), json!([2]), json!([1])] {
            factors_handler(State(state.clone()), request(numbers))
                .await
                .unwrap();
        }

        let keys = keys_handler(State(state)).await;
        let keys: Vec<&str> = keys.keys.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["1,", "2,"]);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
