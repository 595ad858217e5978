//! The `Iterable` trait.
//!
//! Every producer, combinator and container in the workspace implements this
//! trait, and every algorithm consumes it. The contract:
//!
//! - `has_current()` is a pure query: true while a current element exists.
//! - `current()` returns the current element by value. Calling it on an
//!   exhausted sequence is a contract violation: the result is unspecified
//!   and may panic, but it is never undefined behavior.
//! - `advance()` moves to the next element in place and returns `self`.
//!   Advancing an exhausted sequence is a no-op for every type in this
//!   workspace.
//! - Exhaustion is monotonic, except for the explicitly restarting
//!   sequences (`cycle`) and the unbounded producers (`constant`, `iota`).
//!
//! Sequences are value types: `Clone` copies traversal state, and two
//! copies advance independently.
//!
//! Equality: `PartialEq`, where a type provides it, compares *positional
//! state* (counters, cursors, source state). "Same future output" is the
//! separate structural check `iterable_algo::equal`.

use crate::adapter::Iter;

/// A lazy, pull-based sequence of values.
pub trait Iterable {
    type Item;

    /// True if a current element exists.
    fn has_current(&self) -> bool;

    /// The current element. Unspecified once `has_current()` is false.
    fn current(&self) -> Self::Item;

    /// Move to the next element. No-op once exhausted.
    fn advance(&mut self) -> &mut Self;

    /// Checked read of the current element.
    fn get(&self) -> Option<Self::Item> {
        if self.has_current() {
            Some(self.current())
        } else {
            None
        }
    }

    /// Adapt into a `std::iter::Iterator` for `for` loops and std adaptors.
    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }
}

/// Panic for a read past the end. Producers with nothing to hand back on an
/// exhausted `current()` call this.
#[cold]
#[track_caller]
pub fn exhausted() -> ! {
    panic!("current() called on an exhausted sequence")
}

/// Borrowed sequences advance the referent. Algorithms taking `&mut S` use
/// this to consume the caller's copy explicitly.
impl<S: Iterable + ?Sized> Iterable for &mut S {
    type Item = S::Item;

    fn has_current(&self) -> bool {
        (**self).has_current()
    }

    fn current(&self) -> Self::Item {
        (**self).current()
    }

    fn advance(&mut self) -> &mut Self {
        (**self).advance();
        self
    }
}

impl<S: Iterable + ?Sized> Iterable for Box<S> {
    type Item = S::Item;

    fn has_current(&self) -> bool {
        (**self).has_current()
    }

    fn current(&self) -> Self::Item {
        (**self).current()
    }

    fn advance(&mut self) -> &mut Self {
        (**self).advance();
        self
    }
}
