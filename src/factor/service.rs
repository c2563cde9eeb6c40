//! Factor Service Module
//!
//! Canonicalizes requests and runs the cache consult/populate cycle.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::cache::{CacheEntry, CacheKey, CacheStats, CacheStore, DivisorMap};
use crate::error::{FactorError, Result};
use crate::factor::divisors::divisor_map;

// == Cache Outcome ==
/// How a request was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheOutcome {
    /// Served from an existing entry
    Hit,
    /// Computed and inserted
    Miss,
    /// Empty input, cache not consulted
    Bypassed,
}

// == Factorization ==
/// Result of a single request along with how it was served.
#[derive(Debug, Clone)]
pub struct Factorization {
    /// Canonical key, None when the cache was bypassed
    pub key: Option<CacheKey>,
    pub divisors: Arc<DivisorMap>,
    pub outcome: CacheOutcome,
}

// == Factor Service ==
/// Memoizing front end for the restricted divisor search.
#[derive(Debug)]
pub struct FactorService {
    cache: CacheStore,
}

impl FactorService {
    /// Creates a service that owns `cache`.
    pub fn new(cache: CacheStore) -> Self {
        Self { cache }
    }

    /// Creates a service backed by a fresh cache of `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(CacheStore::new(capacity))
    }

    // == Compute Factors ==
    /// Returns the divisor map for `numbers`, computing it on a cache miss.
    ///
    /// Input order is irrelevant: permutations of the same multiset share one
    /// cache entry and receive the same shared map.
    ///
    /// # Errors
    /// `FactorError::InvalidInput` if any value is below 1. The cache is not
    /// touched in that case.
    pub fn compute_factors(&mut self, numbers: &[i64]) -> Result<Arc<DivisorMap>> {
        self.factorize(numbers).map(|f| f.divisors)
    }

    /// Same as [`compute_factors`](Self::compute_factors), also reporting the
    /// key and whether the cache served the request.
    pub fn factorize(&mut self, numbers: &[i64]) -> Result<Factorization> {
        validate(numbers)?;

        if numbers.is_empty() {
            debug!("empty input, cache bypassed");
            return Ok(Factorization {
                key: None,
                divisors: Arc::new(DivisorMap::new()),
                outcome: CacheOutcome::Bypassed,
            });
        }

        let mut sorted = numbers.to_vec();
        sorted.sort_unstable();
        let key = CacheKey::from_sorted(&sorted);

        if let Some(entry) = self.cache.lookup(&key) {
            debug!(key = %key, "cache hit");
            return Ok(Factorization {
                key: Some(key),
                divisors: entry.divisors(),
                outcome: CacheOutcome::Hit,
            });
        }

        debug!(key = %key, "cache miss, computing divisor map");
        let entry = CacheEntry::new(divisor_map(&sorted));
        let divisors = entry.divisors();
        self.cache.insert(key.clone(), entry);

        Ok(Factorization {
            key: Some(key),
            divisors,
            outcome: CacheOutcome::Miss,
        })
    }

    // == Introspection ==
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Cached keys from most to least recently used.
    pub fn recency_keys(&self) -> Vec<CacheKey> {
        self.cache.recency_keys()
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }
}

fn validate(numbers: &[i64]) -> Result<()> {
    match numbers.iter().find(|&&n| n < 1) {
        Some(bad) => Err(FactorError::InvalidInput(format!(
            "{} is not a positive integer",
            bad
        ))),
        None => Ok(()),
    }
}
