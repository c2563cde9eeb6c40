//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the LRU and key-derivation properties against a
//! simple reference model.

use proptest::prelude::*;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use crate::cache::{CacheEntry, CacheKey, CacheStore, DivisorMap};
use crate::factor::{CacheOutcome, FactorService};

// == Strategies ==
/// Generates short multisets of positive integers
fn multiset_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..200, 1..8)
}

fn sorted(mut values: Vec<i64>) -> Vec<i64> {
    values.sort_unstable();
    values
}

fn entry() -> CacheEntry {
    CacheEntry::new(DivisorMap::new())
}

#[derive(Debug, Clone)]
enum CacheOp {
    Insert(u8),
    Lookup(u8),
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (0u8..12).prop_map(CacheOp::Insert),
        (0u8..12).prop_map(CacheOp::Lookup),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any sequence of inserts and lookups leaves the store agreeing with a
    // VecDeque model kept MRU first.
    #[test]
    fn prop_matches_reference_model(
        capacity in 0usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..60)
    ) {
        let mut store = CacheStore::new(capacity);
        let mut model: VecDeque<CacheKey> = VecDeque::new();

        for op in ops {
            match op {
                CacheOp::Insert(k) => {
                    let key = CacheKey::from_sorted(&[i64::from(k)]);
                    store.insert(key.clone(), entry());
                    if capacity == 0 {
                        continue;
                    }
                    if let Some(pos) = model.iter().position(|m| *m == key) {
                        model.remove(pos);
                    } else if model.len() >= capacity {
                        model.pop_back();
                    }
                    model.push_front(key);
                }
                CacheOp::Lookup(k) => {
                    let key = CacheKey::from_sorted(&[i64::from(k)]);
                    let found = store.lookup(&key).is_some();
                    let pos = model.iter().position(|m| *m == key);
                    prop_assert_eq!(found, pos.is_some());
                    if let Some(pos) = pos {
                        model.remove(pos);
                        model.push_front(key);
                    }
                }
            }

            prop_assert!(store.len() <= capacity);
            prop_assert_eq!(store.recency_keys(), model.iter().cloned().collect::<Vec<_>>());
        }
    }

    // Filling to N then inserting one more evicts exactly the least recently
    // touched key, even after an arbitrary lookup promoted another one.
    #[test]
    fn prop_evicts_least_recently_touched(
        capacity in 2usize..8,
        touched in 0usize..8
    ) {
        let touched = touched % capacity;
        let mut store = CacheStore::new(capacity);
        let keys: Vec<CacheKey> = (1..=capacity as i64)
            .map(|n| CacheKey::from_sorted(&[n]))
            .collect();
        for key in &keys {
            store.insert(key.clone(), entry());
        }

        prop_assert!(store.lookup(&keys[touched]).is_some());
        let expected_victim = if touched == 0 { &keys[1] } else { &keys[0] };

        store.insert(CacheKey::from_sorted(&[1000]), entry());

        prop_assert_eq!(store.len(), capacity);
        prop_assert!(!store.contains(expected_victim));
        prop_assert!(store.contains(&keys[touched]));
        prop_assert_eq!(store.stats().evictions, 1);
    }

    // Distinct sorted sequences never share a key.
    #[test]
    fn prop_key_injective(a in multiset_strategy(), b in multiset_strategy()) {
        let a = sorted(a);
        let b = sorted(b);
        prop_assert_eq!(
            a == b,
            CacheKey::from_sorted(&a) == CacheKey::from_sorted(&b)
        );
    }

    // Every permutation of a multiset is served by the first call's entry.
    #[test]
    fn prop_permutations_hit_same_entry(values in multiset_strategy(), seed in any::<u64>()) {
        let mut service = FactorService::with_capacity(4);
        let first = service.factorize(&values).unwrap();

        let mut shuffled = values.clone();
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        shuffled.reverse();
        let second = service.factorize(&shuffled).unwrap();

        prop_assert_eq!(first.outcome, CacheOutcome::Miss);
        prop_assert_eq!(second.outcome, CacheOutcome::Hit);
        prop_assert!(Arc::ptr_eq(&first.divisors, &second.divisors));
    }

    // Every reported divisor divides its key, and every input divisor within
    // the square-root bound is reported.
    #[test]
    fn prop_divisors_divide(values in multiset_strategy()) {
        let mut service = FactorService::with_capacity(1);
        let map = service.compute_factors(&values).unwrap();

        let inputs: HashSet<i64> = values.iter().copied().collect();
        prop_assert_eq!(map.len(), inputs.len());
        for (&n, divisors) in map.iter() {
            for &d in divisors {
                prop_assert_eq!(n % d, 0, "{} does not divide {}", d, n);
                prop_assert!(inputs.contains(&d) || inputs.contains(&(n / d)));
            }
            for &d in &inputs {
                if d * d <= n && n % d == 0 {
                    prop_assert!(divisors.contains(&d));
                }
            }
        }
    }
}
