use std::fmt;

use crate::error::Error;
use crate::error::Result;
use crate::store::Store;
use crate::traversal::Traversal;
use crate::view::Cursor;
use crate::view::Tracked;

/// Insertion order, back to front.
///
/// No permutation is materialized: the cursor walks the store's own
/// positions downward. `None` is the before-first terminal, the single
/// value that begin and end share on an empty store.
pub struct Reverse<T> {
    tracked: Tracked<T>,
    position: Option<usize>,
}

impl<T: Clone> Reverse<T> {
    fn build(store: &Store<T>, at_end: bool) -> Self {
        let position = if at_end { None } else { store.len().checked_sub(1) };
        tracing::trace!(
            order = %Traversal::Reverse,
            len = store.len(),
            revision = store.revision(),
            at_end,
            "built view"
        );
        return Reverse {
            tracked: Tracked::new(store),
            position,
        };
    }

    /// Store position under the cursor, `None` at the terminal.
    pub fn position(&self) -> Option<usize> {
        return self.position;
    }
}

impl<T: Clone> Cursor for Reverse<T> {
    type Item = T;

    fn begin(store: &Store<T>) -> Self {
        return Self::build(store, false);
    }

    fn end(store: &Store<T>) -> Self {
        return Self::build(store, true);
    }

    fn ensure(&self) -> Result<()> {
        self.tracked.live()?;
        if self.position.is_none() {
            return Err(Error::CursorOutOfRange);
        }
        return Ok(());
    }

    fn current(&self) -> Result<T> {
        let slots = self.tracked.live()?;
        let Some(position) = self.position else {
            return Err(Error::CursorOutOfRange);
        };
        return Tracked::read(&slots, position);
    }

    fn advance(&mut self) -> Result<&mut Self> {
        self.tracked.live()?;
        let Some(position) = self.position else {
            return Err(Error::CursorOutOfRange);
        };
        self.position = position.checked_sub(1);
        return Ok(self);
    }

    fn is_terminal(&self) -> bool {
        return self.position.is_none();
    }
}

impl<T> Clone for Reverse<T> {
    fn clone(&self) -> Self {
        return Reverse {
            tracked: self.tracked.clone(),
            position: self.position,
        };
    }
}

impl<T> fmt::Debug for Reverse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("Reverse")
            .field("tracked", &self.tracked)
            .field("position", &self.position)
            .finish();
    }
}

impl<T> PartialEq for Reverse<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.tracked.same_store(&other.tracked) && self.position == other.position;
    }
}
