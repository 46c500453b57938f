//! Names for the six traversal orders.

use std::fmt;

use crate::error::Result;
use crate::store::Store;
use crate::view::Ascending;
use crate::view::Cursor;
use crate::view::Descending;
use crate::view::Insertion;
use crate::view::MiddleOut;
use crate::view::Reverse;
use crate::view::SideCross;

/// One of the six orders a [`Store`] can be walked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    Ascending,
    Descending,
    SideCross,
    Reverse,
    Insertion,
    MiddleOut,
}

impl Traversal {
    /// Every order, in the order the demo prints them.
    pub const ALL: [Traversal; 6] = [
        Traversal::Ascending,
        Traversal::Descending,
        Traversal::SideCross,
        Traversal::Reverse,
        Traversal::Insertion,
        Traversal::MiddleOut,
    ];

    /// Human-readable heading.
    pub fn label(self) -> &'static str {
        return match self {
            Traversal::Ascending => "Ascending Order",
            Traversal::Descending => "Descending Order",
            Traversal::SideCross => "SideCross Order",
            Traversal::Reverse => "Reverse Order",
            Traversal::Insertion => "Order (original)",
            Traversal::MiddleOut => "MiddleOut Order",
        };
    }

    /// Walk this order from its begin view to its end view.
    pub fn collect<T: Clone + PartialOrd>(self, store: &Store<T>) -> Result<Vec<T>> {
        return match self {
            Traversal::Ascending => drain(Ascending::begin(store), Ascending::end(store)),
            Traversal::Descending => drain(Descending::begin(store), Descending::end(store)),
            Traversal::SideCross => drain(SideCross::begin(store), SideCross::end(store)),
            Traversal::Reverse => drain(Reverse::begin(store), Reverse::end(store)),
            Traversal::Insertion => drain(Insertion::begin(store), Insertion::end(store)),
            Traversal::MiddleOut => drain(MiddleOut::begin(store), MiddleOut::end(store)),
        };
    }
}

fn drain<C: Cursor>(mut it: C, end: C) -> Result<Vec<C::Item>> {
    let mut values = Vec::new();
    while it != end {
        values.push(it.current()?);
        it.advance()?;
    }
    return Ok(values);
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Traversal::Ascending => "ascending",
            Traversal::Descending => "descending",
            Traversal::SideCross => "side-cross",
            Traversal::Reverse => "reverse",
            Traversal::Insertion => "insertion",
            Traversal::MiddleOut => "middle-out",
        };
        return f.write_str(name);
    }
}
