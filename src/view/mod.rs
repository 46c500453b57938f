//! Traversal views over a [`Store`].
//!
//! A view captures the store's revision when it is built, computes its
//! visiting order once, and then walks it with a cursor. Every read or
//! step first checks the store's revision; once it differs the view is
//! stale for good. Views hold a `Weak` to the store, so dropping the store
//! also makes them stale.
//!
//! Six orders are provided, one type each:
//!
//! | view            | order                                         | terminal       |
//! |-----------------|-----------------------------------------------|----------------|
//! | [`Ascending`]   | smallest to largest, stable                   | `len`          |
//! | [`Descending`]  | largest to smallest, stable                   | `len`          |
//! | [`Insertion`]   | insertion order                               | `len`          |
//! | [`Reverse`]     | insertion order backwards                     | before-first   |
//! | [`SideCross`]   | smallest, largest, 2nd smallest, 2nd largest  | `len`          |
//! | [`MiddleOut`]   | middle, then alternating outward              | `len`          |

use std::fmt;
use std::rc::Rc;
use std::rc::Weak;

use crate::error::Error;
use crate::error::Result;
use crate::store::Slots;
use crate::store::Store;
use crate::traversal::Traversal;

pub mod permutation;

/// Implements `Cursor`, `Clone`, `Debug`, `PartialEq` and `positions` for
/// a view that wraps a `Permuted` in a field named `inner` and has an
/// inherent `build(store, at_end)`.
macro_rules! permuted_view {
    ($view:ident, $($bound:tt)+) => {
        impl<T> $view<T> {
            /// Store positions in visiting order.
            pub fn positions(&self) -> &[usize] {
                return self.inner.permutation();
            }
        }

        impl<T: $($bound)+> $crate::view::Cursor for $view<T> {
            type Item = T;

            fn begin(store: &$crate::store::Store<T>) -> Self {
                return Self::build(store, false);
            }

            fn end(store: &$crate::store::Store<T>) -> Self {
                return Self::build(store, true);
            }

            fn ensure(&self) -> $crate::error::Result<()> {
                return self.inner.ensure();
            }

            fn current(&self) -> $crate::error::Result<T> {
                return self.inner.current();
            }

            fn advance(&mut self) -> $crate::error::Result<&mut Self> {
                self.inner.advance()?;
                return Ok(self);
            }

            fn is_terminal(&self) -> bool {
                return self.inner.is_terminal();
            }
        }

        impl<T> Clone for $view<T> {
            fn clone(&self) -> Self {
                return $view { inner: self.inner.clone() };
            }
        }

        impl<T> ::std::fmt::Debug for $view<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                return f.debug_tuple(stringify!($view)).field(&self.inner).finish();
            }
        }

        impl<T> PartialEq for $view<T> {
            fn eq(&self, other: &Self) -> bool {
                return self.inner == other.inner;
            }
        }
    };
}

mod insertion;
mod middle_out;
mod reverse;
mod side_cross;
mod sorted;

pub use insertion::Insertion;
pub use middle_out::MiddleOut;
pub use permutation::Permutation;
pub use reverse::Reverse;
pub use side_cross::SideCross;
pub use sorted::Ascending;
pub use sorted::Descending;

/// The cursor contract shared by every view.
///
/// Two views are equal when they point into the same store at the same
/// cursor position; the usual loop is `while it != end { it.current()?;
/// it.advance()?; }`.
pub trait Cursor: Sized + PartialEq {
    type Item;

    /// Build a view at the first position of its order.
    fn begin(store: &Store<Self::Item>) -> Self;

    /// Build a view at its terminal position.
    fn end(store: &Store<Self::Item>) -> Self;

    /// Check that the view is fresh and not at its terminal.
    ///
    /// Staleness is checked before bounds.
    fn ensure(&self) -> Result<()>;

    /// Copy of the element under the cursor.
    fn current(&self) -> Result<Self::Item>;

    /// Step toward the terminal.
    fn advance(&mut self) -> Result<&mut Self>;

    /// Whether the cursor sits on its terminal. Does not check staleness.
    fn is_terminal(&self) -> bool;

    /// Step toward the terminal and return the view as it was before.
    fn advance_post(&mut self) -> Result<Self>
    where
        Self: Clone,
    {
        self.ensure()?;
        let previous = self.clone();
        self.advance()?;
        return Ok(previous);
    }

    /// Turn the view into an iterator of checked reads.
    fn walk(self) -> Walk<Self> {
        return Walk { cursor: self, done: false };
    }
}

/// Iterator over a view, yielding `Err` once if the view goes stale.
pub struct Walk<C> {
    cursor: C,
    done: bool,
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = Result<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Reading first so a stale view is reported even at its terminal.
        let value = match self.cursor.current() {
            Ok(value) => value,
            Err(Error::CursorOutOfRange) => {
                self.done = true;
                return None;
            }
            Err(error) => {
                self.done = true;
                return Some(Err(error));
            }
        };

        if let Err(error) = self.cursor.advance() {
            self.done = true;
            return Some(Err(error));
        }
        return Some(Ok(value));
    }
}

/// Non-owning handle to a store plus the revision it was seen at.
pub(crate) struct Tracked<T> {
    slots: Weak<Slots<T>>,
    captured: u64,
}

impl<T> Tracked<T> {
    pub(crate) fn new(store: &Store<T>) -> Tracked<T> {
        return Tracked {
            slots: store.downgrade(),
            captured: store.revision(),
        };
    }

    /// The store, if it still exists at the captured revision.
    pub(crate) fn live(&self) -> Result<Rc<Slots<T>>> {
        let Some(slots) = self.slots.upgrade() else {
            tracing::debug!(captured = self.captured, "view outlived its store");
            return Err(Error::StaleView { captured: self.captured, current: None });
        };

        let current = slots.revision.get();
        if current != self.captured {
            tracing::debug!(captured = self.captured, current, "stale view");
            return Err(Error::StaleView { captured: self.captured, current: Some(current) });
        }
        return Ok(slots);
    }

    pub(crate) fn same_store(&self, other: &Tracked<T>) -> bool {
        return Weak::ptr_eq(&self.slots, &other.slots);
    }
}

impl<T: Clone> Tracked<T> {
    /// Copy the element at `position` out of a live store.
    pub(crate) fn read(slots: &Slots<T>, position: usize) -> Result<T> {
        return slots
            .elements
            .borrow()
            .get(position)
            .cloned()
            .ok_or(Error::CursorOutOfRange);
    }
}

impl<T> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        return Tracked {
            slots: self.slots.clone(),
            captured: self.captured,
        };
    }
}

/// A precomputed permutation walked front to back.
///
/// Backs every view except [`Reverse`]. The terminal is
/// `permutation.len()`.
pub(crate) struct Permuted<T> {
    tracked: Tracked<T>,
    permutation: Permutation,
    cursor: usize,
}

impl<T> Permuted<T> {
    pub(crate) fn build(
        store: &Store<T>,
        order: Traversal,
        at_end: bool,
        permute: impl FnOnce(&[T]) -> Permutation,
    ) -> Permuted<T> {
        let permutation = permute(&*store.elements());
        let cursor = if at_end { permutation.len() } else { 0 };
        tracing::trace!(
            order = %order,
            len = permutation.len(),
            revision = store.revision(),
            at_end,
            "built view"
        );
        return Permuted {
            tracked: Tracked::new(store),
            permutation,
            cursor,
        };
    }

    pub(crate) fn ensure(&self) -> Result<()> {
        self.tracked.live()?;
        if self.is_terminal() {
            return Err(Error::CursorOutOfRange);
        }
        return Ok(());
    }

    pub(crate) fn advance(&mut self) -> Result<()> {
        self.ensure()?;
        self.cursor += 1;
        return Ok(());
    }

    pub(crate) fn is_terminal(&self) -> bool {
        return self.cursor >= self.permutation.len();
    }

    pub(crate) fn permutation(&self) -> &[usize] {
        return &self.permutation;
    }
}

impl<T: Clone> Permuted<T> {
    pub(crate) fn current(&self) -> Result<T> {
        let slots = self.tracked.live()?;
        let Some(&position) = self.permutation.get(self.cursor) else {
            return Err(Error::CursorOutOfRange);
        };
        return Tracked::read(&slots, position);
    }
}

impl<T> Clone for Permuted<T> {
    fn clone(&self) -> Self {
        return Permuted {
            tracked: self.tracked.clone(),
            permutation: self.permutation.clone(),
            cursor: self.cursor,
        };
    }
}

impl<T> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("Tracked")
            .field("captured", &self.captured)
            .field("alive", &(self.slots.strong_count() > 0))
            .finish();
    }
}

impl<T> fmt::Debug for Permuted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("Permuted")
            .field("tracked", &self.tracked)
            .field("permutation", &self.permutation.as_slice())
            .field("cursor", &self.cursor)
            .finish();
    }
}

impl<T> PartialEq for Permuted<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.tracked.same_store(&other.tracked) && self.cursor == other.cursor;
    }
}
