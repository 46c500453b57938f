//! Value-ordered views.

use crate::store::Store;
use crate::traversal::Traversal;
use crate::view::Permuted;
use crate::view::permutation;

/// Smallest to largest. Equal values keep insertion order.
pub struct Ascending<T> {
    inner: Permuted<T>,
}

impl<T: Clone + PartialOrd> Ascending<T> {
    fn build(store: &Store<T>, at_end: bool) -> Self {
        return Ascending {
            inner: Permuted::build(store, Traversal::Ascending, at_end, permutation::ascending),
        };
    }
}

permuted_view!(Ascending, Clone + PartialOrd);

/// Largest to smallest. Equal values keep insertion order, so this is
/// the exact reverse of [`Ascending`] only when no two values tie.
pub struct Descending<T> {
    inner: Permuted<T>,
}

impl<T: Clone + PartialOrd> Descending<T> {
    fn build(store: &Store<T>, at_end: bool) -> Self {
        return Descending {
            inner: Permuted::build(store, Traversal::Descending, at_end, permutation::descending),
        };
    }
}

permuted_view!(Descending, Clone + PartialOrd);
