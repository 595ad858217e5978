//! Endless restart of a base sequence from an explicitly stored start copy.
//!
//! An empty base yields an empty cycle rather than spinning.

use crate::Iterable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cycle<S> {
    start: S,
    live: S,
}

impl<S: Clone> Cycle<S> {
    pub fn new(s: S) -> Self {
        Self {
            start: s.clone(),
            live: s,
        }
    }
}

pub fn cycle<S: Iterable + Clone>(s: S) -> Cycle<S> {
    Cycle::new(s)
}

/// Alias of [`cycle`].
pub fn repeat<S: Iterable + Clone>(s: S) -> Cycle<S> {
    Cycle::new(s)
}

impl<S: Iterable + Clone> Iterable for Cycle<S> {
    type Item = S::Item;

    fn has_current(&self) -> bool {
        self.live.has_current()
    }

    fn current(&self) -> S::Item {
        self.live.current()
    }

    fn advance(&mut self) -> &mut Self {
        if !self.live.has_current() {
            return self;
        }
        self.live.advance();
        if !self.live.has_current() {
            #[cfg(feature = "tracing")]
            tracing::trace!("cycle: base exhausted, restarting");
            self.live = self.start.clone();
        }
        self
    }
}
