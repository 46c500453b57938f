use crate::store::Store;
use crate::traversal::Traversal;
use crate::view::Permuted;
use crate::view::permutation;

/// Starts at position `len / 2` and fans out: left, right, left, right.
pub struct MiddleOut<T> {
    inner: Permuted<T>,
}

impl<T: Clone> MiddleOut<T> {
    fn build(store: &Store<T>, at_end: bool) -> Self {
        return MiddleOut {
            inner: Permuted::build(store, Traversal::MiddleOut, at_end, |elements| {
                permutation::middle_out(elements.len())
            }),
        };
    }
}

permuted_view!(MiddleOut, Clone);
