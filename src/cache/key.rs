//! Cache Key Module
//!
//! Canonical encoding of an input multiset.

use std::fmt;

use serde::Serialize;

/// Terminates every number in the encoded key. Never appears in a decimal integer.
const SEPARATOR: char = ',';

// == Cache Key ==
/// Canonical key for a sorted multiset of integers.
///
/// Every value is written in decimal and terminated by `,`, so `[1, 23]`
/// encodes to `"1,23,"` and `[3, 12]` to `"3,12,"`. Duplicates are kept:
/// the key identifies the multiset, not the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// Builds a key from an already sorted slice.
    ///
    /// Callers must sort first; permutations of the same multiset only
    /// collide once sorted.
    pub fn from_sorted(sorted: &[i64]) -> Self {
        debug_assert!(
            sorted.windows(2).all(|w| w[0] <= w[1]),
            "CacheKey::from_sorted requires ascending input"
        );

        let mut encoded = String::with_capacity(sorted.len() * 4);
        for value in sorted {
            encoded.push_str(&value.to_string());
            encoded.push(SEPARATOR);
        }
        Self(encoded)
    }

    /// Returns the encoded key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
