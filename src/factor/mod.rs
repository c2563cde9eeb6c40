//! Factor Module
//!
//! Divisor-map computation memoized through the LRU cache.

mod divisors;
mod service;

pub use divisors::divisor_map;
pub use service::{CacheOutcome, FactorService, Factorization};
