//! Request DTOs for the factor API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{FactorError, Result};

/// Request body for POST /factors
///
/// `numbers` is kept as raw JSON so that floats, strings and out-of-range
/// values are reported as invalid input rather than as a body rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct FactorRequest {
    /// The integers to factor, in any order
    pub numbers: Vec<Value>,
}

impl FactorRequest {
    /// Extracts the numbers as `i64`, rejecting anything that is not a JSON integer.
    ///
    /// Positivity is checked by the service.
    pub fn integers(&self) -> Result<Vec<i64>> {
        self.numbers
            .iter()
            .map(|value| {
                value.as_i64().ok_or_else(|| {
                    FactorError::InvalidInput(format!("{} is not an integer", value))
                })
            })
            .collect()
    }
}
