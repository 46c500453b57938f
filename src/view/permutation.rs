//! Permutation builders.
//!
//! Each builder maps a slice of elements to the order in which a view
//! visits their positions. All of them run once, when a view is built.

use std::cmp::Ordering;

use smallvec::SmallVec;

/// Positions into a store's elements, in visiting order.
///
/// Small stores (the common case for ad hoc traversals) stay inline.
pub type Permutation = SmallVec<[usize; 16]>;

/// Values incomparable with themselves (NaN) rank above everything else
/// and tie with each other, which keeps the order total for floats.
fn compare<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    return match a.partial_cmp(b) {
        Some(ordering) => ordering,
        None => unordered(a).cmp(&unordered(b)),
    };
}

fn unordered<T: PartialOrd>(value: &T) -> bool {
    return value.partial_cmp(value).is_none();
}

/// `0, 1, ..., len - 1`.
pub fn identity(len: usize) -> Permutation {
    return (0..len).collect();
}

/// Positions sorted by value, smallest first. Ties keep insertion order.
pub fn ascending<T: PartialOrd>(elements: &[T]) -> Permutation {
    let mut order = identity(elements.len());
    order.sort_by(|&a, &b| compare(&elements[a], &elements[b]));
    return order;
}

/// Positions sorted by value, largest first. Ties keep insertion order.
pub fn descending<T: PartialOrd>(elements: &[T]) -> Permutation {
    let mut order = identity(elements.len());
    order.sort_by(|&a, &b| compare(&elements[b], &elements[a]));
    return order;
}

/// Smallest, largest, second smallest, second largest, ...
///
/// Two pointers walk the ascending order inward from both ends. When they
/// meet on an odd-sized input the middle is emitted once.
pub fn side_cross<T: PartialOrd>(elements: &[T]) -> Permutation {
    let sorted = ascending(elements);
    let mut order = Permutation::with_capacity(sorted.len());
    if sorted.is_empty() {
        return order;
    }

    let mut left = 0;
    let mut right = sorted.len() - 1;
    while left <= right {
        order.push(sorted[left]);
        if left != right {
            order.push(sorted[right]);
        }
        left += 1;
        if right == 0 {
            break;
        }
        right -= 1;
    }
    return order;
}

/// `len / 2`, then one left, one right, two left, two right, ...
///
/// A side that runs out of bounds is skipped while the other still has
/// positions left.
pub fn middle_out(len: usize) -> Permutation {
    let mut order = Permutation::with_capacity(len);
    if len == 0 {
        return order;
    }

    let mid = len / 2;
    order.push(mid);

    let mut offset = 1;
    while order.len() < len {
        if offset <= mid {
            order.push(mid - offset);
        }
        if mid + offset < len {
            order.push(mid + offset);
        }
        offset += 1;
    }
    return order;
}
