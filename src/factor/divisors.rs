//! Restricted-set divisor search.
//!
//! Only members of the input are tried as divisors, so a true divisor of `n`
//! that was not requested is never reported. The cofactor `n / d` of a
//! matching candidate is reported whether or not it was requested.

use crate::cache::DivisorMap;

/// Computes the divisor map of an ascending slice of positive integers.
///
/// For each distinct `n`, every distinct candidate `d` with `d * d <= n` is
/// tested; on `n % d == 0` both `d` and `n / d` are recorded, the latter only
/// when it differs from `d`.
pub fn divisor_map(sorted: &[i64]) -> DivisorMap {
    let mut candidates = sorted.to_vec();
    candidates.dedup();

    candidates
        .iter()
        .map(|&n| (n, divisors_of(n, &candidates)))
        .collect()
}

fn divisors_of(n: i64, candidates: &[i64]) -> Vec<i64> {
    let mut divisors = Vec::new();
    // `d <= n / d` is `d * d <= n` without the overflow
    for &d in candidates.iter().take_while(|&&d| d <= n / d) {
        if n % d == 0 {
            divisors.push(d);
            let cofactor = n / d;
            if cofactor != d {
                divisors.push(cofactor);
            }
        }
    }
    divisors
}
