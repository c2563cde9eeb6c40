//! Error types for the factor cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Factor Error Enum ==
/// Unified error type for the factor service.
///
/// Cache misses and capacity evictions are normal control flow and never
/// surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactorError {
    /// Input contained a non-positive or non-integer value
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for FactorError {
    fn into_response(self) -> Response {
        let status = match &self {
            FactorError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the factor service.
pub type Result<T> = std::result::Result<T, FactorError>;
