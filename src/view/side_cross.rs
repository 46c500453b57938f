use crate::store::Store;
use crate::traversal::Traversal;
use crate::view::Permuted;
use crate::view::permutation;

/// Smallest, largest, second smallest, second largest, and so on inward.
pub struct SideCross<T> {
    inner: Permuted<T>,
}

impl<T: Clone + PartialOrd> SideCross<T> {
    fn build(store: &Store<T>, at_end: bool) -> Self {
        return SideCross {
            inner: Permuted::build(store, Traversal::SideCross, at_end, permutation::side_cross),
        };
    }
}

permuted_view!(SideCross, Clone + PartialOrd);
