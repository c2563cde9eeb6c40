//! Factor Cache - memoized restricted-set divisor maps
//!
//! Serves repeated divisor-map requests from a bounded LRU cache keyed by the
//! sorted input multiset.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod factor;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use error::{FactorError, Result};
pub use factor::{CacheOutcome, FactorService};
