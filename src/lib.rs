//! Orderings - an in-memory collection with six traversal orders.
//!
//! A [`Store`] keeps elements in insertion order. Views walk those
//! elements ascending, descending, in insertion order, reversed,
//! side-cross (smallest, largest, 2nd smallest, ...) or middle-out,
//! without copying the elements. Each view computes its order once and
//! fails with [`Error::StaleView`] if the store changes underneath it.
//!
//! # Quick Start
//!
//! ```
//! use orderings::{Store, Traversal};
//! use orderings::view::{Cursor, SideCross};
//!
//! let mut store = Store::new();
//! for value in [7, 15, 6, 1, 2] {
//!     store.append(value);
//! }
//! assert_eq!(store.to_string(), "[7, 15, 6, 1, 2]");
//!
//! let mut it = SideCross::begin(&store);
//! let end = SideCross::end(&store);
//! let mut seen = vec![];
//! while it != end {
//!     seen.push(it.current().unwrap());
//!     it.advance().unwrap();
//! }
//! assert_eq!(seen, vec![1, 15, 2, 7, 6]);
//!
//! assert_eq!(store.collect(Traversal::MiddleOut).unwrap(), vec![6, 15, 1, 7, 2]);
//! ```
//!
//! Views are single-threaded observers: the revision check catches
//! mutation between accesses, it does not synchronize anything.

pub mod error;
pub mod store;
pub mod traversal;
pub mod view;

pub use error::Error;
pub use error::Result;
pub use store::Store;
pub use traversal::Traversal;
