//! Error types for store mutation and view access.

use thiserror::Error;

/// Errors returned by [`Store`](crate::Store) and the traversal views.
///
/// None of these are transient: `ElementNotFound` and `CursorOutOfRange`
/// are ordinary outcomes a caller handles locally, while `StaleView` is
/// permanent for the view that produced it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `remove_all` found no element equal to the target.
    #[error("element not found in store")]
    ElementNotFound,

    /// The store was mutated (or dropped) after the view was built.
    ///
    /// `current` is `None` when the store no longer exists.
    #[error("view is stale: built at revision {captured}, store is at {current:?}")]
    StaleView { captured: u64, current: Option<u64> },

    /// The cursor sits on its terminal position.
    #[error("cursor out of range")]
    CursorOutOfRange,
}

impl Error {
    /// Check if this error came from removing an absent value.
    pub fn is_not_found(&self) -> bool {
        return matches!(self, Error::ElementNotFound);
    }

    /// Check if this error indicates the view must be discarded.
    pub fn is_stale(&self) -> bool {
        return matches!(self, Error::StaleView { .. });
    }

    /// Check if this error came from stepping or reading past the terminal.
    pub fn is_out_of_range(&self) -> bool {
        return matches!(self, Error::CursorOutOfRange);
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
