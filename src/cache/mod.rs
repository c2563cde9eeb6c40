//! Cache Module
//!
//! Provides the bounded in-memory LRU cache for computed divisor maps.

mod entry;
mod key;
mod lru;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{CacheEntry, DivisorMap};
pub use key::CacheKey;
pub use lru::{Keys, RecencyList};
pub use stats::CacheStats;
pub use store::CacheStore;
