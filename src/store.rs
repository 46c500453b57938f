//! The sequence store: elements in insertion order plus a revision counter.
//!
//! The store owns its elements behind an `Rc`. Views only ever hold a
//! `Weak` to the same allocation, so they never keep a store alive and
//! can tell when it is gone. Every successful mutation bumps the revision
//! by exactly one; views compare it against the value they captured.

use std::cell::Cell;
use std::cell::Ref;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::rc::Weak;

use crate::error::Error;
use crate::error::Result;
use crate::traversal::Traversal;
use crate::view::Cursor;

/// Shared state behind a store. Views reach it through a `Weak`.
pub(crate) struct Slots<T> {
    pub(crate) elements: RefCell<Vec<T>>,
    pub(crate) revision: Cell<u64>,
}

/// An insertion-ordered collection with revision tracking.
///
/// ```
/// use orderings::Store;
/// use orderings::view::{Ascending, Cursor};
///
/// let mut store = Store::new();
/// store.append(3);
/// store.append(1);
/// store.append(2);
///
/// let mut it = Ascending::begin(&store);
/// let end = Ascending::end(&store);
/// let mut seen = vec![];
/// while it != end {
///     seen.push(it.current().unwrap());
///     it.advance().unwrap();
/// }
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub struct Store<T> {
    slots: Rc<Slots<T>>,
}

impl<T> Store<T> {
    /// Create an empty store at revision 0.
    pub fn new() -> Store<T> {
        return Store {
            slots: Rc::new(Slots {
                elements: RefCell::new(Vec::new()),
                revision: Cell::new(0),
            }),
        };
    }

    /// Append a value at the end.
    pub fn append(&mut self, value: T) {
        self.slots.elements.borrow_mut().push(value);
        self.bump();
        tracing::trace!(len = self.len(), revision = self.revision(), "append");
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        return self.slots.elements.borrow().len();
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Current revision. Starts at 0 and grows by one per mutation.
    pub fn revision(&self) -> u64 {
        return self.slots.revision.get();
    }

    /// Borrow the elements in insertion order.
    pub fn elements(&self) -> Ref<'_, [T]> {
        return Ref::map(self.slots.elements.borrow(), |v| v.as_slice());
    }

    /// Build a view positioned at the first element of its order.
    pub fn begin<V: Cursor<Item = T>>(&self) -> V {
        return V::begin(self);
    }

    /// Build a view positioned at its terminal.
    pub fn end<V: Cursor<Item = T>>(&self) -> V {
        return V::end(self);
    }

    pub(crate) fn downgrade(&self) -> Weak<Slots<T>> {
        return Rc::downgrade(&self.slots);
    }

    fn bump(&mut self) {
        self.slots.revision.set(self.slots.revision.get() + 1);
    }
}

impl<T: PartialEq> Store<T> {
    /// Remove every element equal to `value`, keeping the order of the rest.
    ///
    /// Returns how many elements were removed. If none matched, the store
    /// is left untouched (revision included) and `ElementNotFound` is
    /// returned. Otherwise the revision grows by exactly one.
    pub fn remove_all(&mut self, value: &T) -> Result<usize> {
        let removed = {
            let mut elements = self.slots.elements.borrow_mut();
            let before = elements.len();
            elements.retain(|e| e != value);
            before - elements.len()
        };

        if removed == 0 {
            return Err(Error::ElementNotFound);
        }

        self.bump();
        tracing::debug!(removed, len = self.len(), revision = self.revision(), "remove_all");
        return Ok(removed);
    }

    pub fn contains(&self, value: &T) -> bool {
        return self.slots.elements.borrow().contains(value);
    }
}

impl<T: Clone + PartialOrd> Store<T> {
    /// Materialize one traversal order by walking its begin view to its
    /// end view.
    pub fn collect(&self, order: Traversal) -> Result<Vec<T>> {
        return order.collect(self);
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T> Extend<T> for Store<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for Store<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut store = Store::new();
        store.extend(iter);
        return store;
    }
}

/// Renders `[e0, e1, ..., en-1]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.elements().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        return write!(f, "]");
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("Store")
            .field("elements", &&*self.elements())
            .field("revision", &self.revision())
            .finish();
    }
}
