//! Bridge from the sequence contract to `std::iter::Iterator`.
//!
//! `Iter` yields `current()` then advances, so `for x in s.iter()` and the
//! whole std adaptor toolbox work on any sequence.

use std::iter::FusedIterator;

use crate::iterable::Iterable;

#[derive(Debug, Clone, PartialEq)]
pub struct Iter<S> {
    seq: S,
}

impl<S> Iter<S> {
    pub fn new(seq: S) -> Self {
        Self { seq }
    }

    /// Recover the sequence at its current position.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Iterable> Iterator for Iter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.seq.get()?;
        self.seq.advance();
        Some(value)
    }
}

// Exhaustion is monotonic for terminating sequences and never happens for
// the restarting ones, so a `None` is final.
impl<S: Iterable> FusedIterator for Iter<S> {}
