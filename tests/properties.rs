//! Property-based tests for the traversal orders and store mutation.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use orderings::view::{Ascending, Cursor, Descending, Insertion, MiddleOut, Reverse, SideCross};
use orderings::{Store, Traversal};

// =============================================================================
// Test helpers
// =============================================================================

fn store_of(values: &[i32]) -> Store<i32> {
    return values.iter().copied().collect();
}

/// Every position `0..len` exactly once.
fn is_permutation(positions: &[usize], len: usize) -> bool {
    let seen: FxHashSet<usize> = positions.iter().copied().collect();
    return positions.len() == len && seen.len() == len && positions.iter().all(|&p| p < len);
}

fn arbitrary_values() -> impl Strategy<Value = Vec<i32>> {
    // Small value range so ties are common.
    return prop::collection::vec(-20..20i32, 0..64);
}

// =============================================================================
// Order properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every order yields each position exactly once.
    #[test]
    fn orders_are_permutations(values in arbitrary_values()) {
        let store = store_of(&values);
        let n = values.len();
        prop_assert!(is_permutation(Ascending::begin(&store).positions(), n));
        prop_assert!(is_permutation(Descending::begin(&store).positions(), n));
        prop_assert!(is_permutation(SideCross::begin(&store).positions(), n));
        prop_assert!(is_permutation(MiddleOut::begin(&store).positions(), n));

        for order in Traversal::ALL {
            let mut got = store.collect(order).unwrap();
            let mut want = values.clone();
            got.sort();
            want.sort();
            prop_assert_eq!(got, want, "{}", order);
        }
    }

    /// Ascending matches a stable sort; descending keeps ties in insertion order.
    #[test]
    fn sorted_orders_are_stable(values in arbitrary_values()) {
        let store = store_of(&values);

        let mut want: Vec<usize> = (0..values.len()).collect();
        want.sort_by_key(|&i| values[i]);
        let ascending = Ascending::begin(&store);
        prop_assert_eq!(ascending.positions(), want.as_slice());

        let mut want: Vec<usize> = (0..values.len()).collect();
        want.sort_by_key(|&i| std::cmp::Reverse(values[i]));
        let descending = Descending::begin(&store);
        prop_assert_eq!(descending.positions(), want.as_slice());
    }

    /// Without ties, descending is ascending reversed.
    #[test]
    fn distinct_values_sort_symmetrically(set in prop::collection::hash_set(any::<i32>(), 0..64)) {
        let values: Vec<i32> = set.into_iter().collect();
        let store = store_of(&values);
        let mut ascending = store.collect(Traversal::Ascending).unwrap();
        ascending.reverse();
        prop_assert_eq!(ascending, store.collect(Traversal::Descending).unwrap());
    }

    /// Side-cross alternates ends of the sorted order.
    #[test]
    fn side_cross_alternates_ends(values in arbitrary_values()) {
        let store = store_of(&values);
        let sorted = Ascending::begin(&store).positions().to_vec();
        let crossed = SideCross::begin(&store).positions().to_vec();
        let n = sorted.len();
        for (k, position) in crossed.iter().enumerate() {
            let want = if k % 2 == 0 { sorted[k / 2] } else { sorted[n - 1 - k / 2] };
            prop_assert_eq!(*position, want);
        }
    }

    /// Middle-out is `mid`, then `mid - k` before `mid + k` for each k,
    /// skipping whichever side is out of bounds.
    #[test]
    fn middle_out_fans_out(values in arbitrary_values()) {
        let store = store_of(&values);
        let n = values.len();
        let mut want = Vec::with_capacity(n);
        if n > 0 {
            let mid = n / 2;
            want.push(mid);
            for k in 1..=n {
                if k <= mid {
                    want.push(mid - k);
                }
                if mid + k < n {
                    want.push(mid + k);
                }
            }
        }
        let middle_out = MiddleOut::begin(&store);
        prop_assert_eq!(middle_out.positions(), want.as_slice());
    }

    /// Reverse is insertion order backwards.
    #[test]
    fn reverse_mirrors_insertion(values in arbitrary_values()) {
        let store = store_of(&values);
        let mut want = values.clone();
        want.reverse();
        prop_assert_eq!(store.collect(Traversal::Reverse).unwrap(), want);
        prop_assert_eq!(store.collect(Traversal::Insertion).unwrap(), values);
    }

    /// A begin view stepped `len` times equals the end view.
    #[test]
    fn len_steps_reach_end(values in arbitrary_values()) {
        let store = store_of(&values);
        let mut reverse = Reverse::begin(&store);
        let mut insertion = Insertion::begin(&store);
        for _ in 0..values.len() {
            reverse.advance().unwrap();
            insertion.advance().unwrap();
        }
        prop_assert!(reverse == Reverse::end(&store));
        prop_assert!(insertion == Insertion::end(&store));
        prop_assert!(reverse.current().unwrap_err().is_out_of_range());
        prop_assert!(insertion.current().unwrap_err().is_out_of_range());
    }
}

// =============================================================================
// Mutation properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// remove_all matches a retain, and fails without touching the store
    /// when nothing matches.
    #[test]
    fn remove_all_matches_retain(values in arbitrary_values(), target in -25..25i32) {
        let mut store = store_of(&values);
        let revision = store.revision();
        let want: Vec<i32> = values.iter().copied().filter(|&v| v != target).collect();

        match store.remove_all(&target) {
            Ok(removed) => {
                prop_assert_eq!(removed, values.len() - want.len());
                prop_assert!(removed > 0);
                prop_assert_eq!(store.revision(), revision + 1);
            }
            Err(error) => {
                prop_assert!(error.is_not_found());
                prop_assert_eq!(want.len(), values.len());
                prop_assert_eq!(store.revision(), revision);
            }
        }
        let remaining = store.elements().to_vec();
        prop_assert_eq!(remaining, want);
    }

    /// Any successful mutation makes every earlier view stale.
    #[test]
    fn mutation_stales_views(values in arbitrary_values(), extra in any::<i32>()) {
        let mut store = store_of(&values);
        let ascending = Ascending::begin(&store);
        let middle_out = MiddleOut::begin(&store);
        let reverse_end = Reverse::end(&store);

        store.append(extra);

        prop_assert!(ascending.current().unwrap_err().is_stale());
        prop_assert!(middle_out.current().unwrap_err().is_stale());
        prop_assert!(reverse_end.current().unwrap_err().is_stale());
    }
}
