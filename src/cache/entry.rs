//! Cache Entry Module
//!
//! Defines the immutable result set held by the cache.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Mapping from each distinct input integer to the divisors found for it.
pub type DivisorMap = BTreeMap<i64, Vec<i64>>;

// == Cache Entry ==
/// A computed divisor map, shared read-only between the cache and callers.
///
/// Cloning an entry clones the `Arc`, never the map, so every caller served
/// by the same entry sees the same allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    divisors: Arc<DivisorMap>,
}

impl CacheEntry {
    // == Constructor ==
    /// Wraps a freshly computed divisor map.
    pub fn new(divisors: DivisorMap) -> Self {
        Self {
            divisors: Arc::new(divisors),
        }
    }

    /// Returns a shared handle to the divisor map.
    pub fn divisors(&self) -> Arc<DivisorMap> {
        Arc::clone(&self.divisors)
    }

    /// Number of distinct integers in the result set.
    pub fn len(&self) -> usize {
        self.divisors.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.divisors.is_empty()
    }
}

impl From<DivisorMap> for CacheEntry {
    fn from(divisors: DivisorMap) -> Self {
        Self::new(divisors)
    }
}
