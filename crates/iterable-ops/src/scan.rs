//! Growing prefixes: `take(1, s), take(2, s), ...`, one per element of `s`.

use crate::take::Take;
use crate::Iterable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scan<S> {
    start: S,
    end: S,
    len: usize,
}

impl<S: Clone> Scan<S> {
    pub fn new(s: S) -> Self {
        Self {
            start: s.clone(),
            end: s,
            len: 1,
        }
    }
}

pub fn scan<S: Iterable + Clone>(s: S) -> Scan<S> {
    Scan::new(s)
}

impl<S: Iterable + Clone> Iterable for Scan<S> {
    type Item = Take<S>;

    fn has_current(&self) -> bool {
        self.end.has_current()
    }

    fn current(&self) -> Take<S> {
        Take::new(self.len, self.start.clone())
    }

    fn advance(&mut self) -> &mut Self {
        if self.end.has_current() {
            self.end.advance();
            self.len += 1;
        }
        self
    }
}
