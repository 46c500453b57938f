use crate::store::Store;
use crate::traversal::Traversal;
use crate::view::Permuted;
use crate::view::permutation;

/// Insertion order, front to back.
///
/// Replays the store as-is, but through the same checked cursor as the
/// other orders.
pub struct Insertion<T> {
    inner: Permuted<T>,
}

impl<T: Clone> Insertion<T> {
    fn build(store: &Store<T>, at_end: bool) -> Self {
        return Insertion {
            inner: Permuted::build(store, Traversal::Insertion, at_end, |elements| {
                permutation::identity(elements.len())
            }),
        };
    }
}

permuted_view!(Insertion, Clone);
