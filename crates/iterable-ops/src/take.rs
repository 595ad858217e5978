//! At most `n` elements.

use crate::Iterable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Take<S> {
    n: usize,
    s: S,
}

impl<S> Take<S> {
    pub fn new(n: usize, s: S) -> Self {
        Self { n, s }
    }

    /// Elements still allowed through (not counting source exhaustion).
    pub fn remaining(&self) -> usize {
        self.n
    }

    /// The source. Once the count runs out it is still on the last element
    /// this `Take` passed.
    pub fn into_inner(self) -> S {
        self.s
    }
}

pub fn take<S: Iterable>(n: usize, s: S) -> Take<S> {
    Take::new(n, s)
}

impl<S: Iterable> Iterable for Take<S> {
    type Item = S::Item;

    fn has_current(&self) -> bool {
        self.n > 0 && self.s.has_current()
    }

    fn current(&self) -> S::Item {
        self.s.current()
    }

    fn advance(&mut self) -> &mut Self {
        if self.has_current() {
            self.n -= 1;
            // the source never moves past the last element in the window
            if self.n > 0 {
                self.s.advance();
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, iota};

    #[test]
    fn test_take() {
        let i = [1, 2, 3];
        let mut t = take(3, crate::pointer(&i));
        let t2 = t;
        assert_eq!(t, t2);

        assert!(t.has_current());
        assert_eq!(t.current(), 1);
        t.advance();
        assert_eq!(t.current(), 2);
        t.advance();
        assert_eq!(t.current(), 3);
        t.advance();
        assert!(!t.has_current());
        assert_eq!(t.remaining(), 0);
    }

    #[test]
    fn test_take_shorter_source() {
        let i = [1, 2];
        let mut t = take(5, array(&i));
        t.advance().advance();
        assert!(!t.has_current());
        // the count only drops while the source had elements
        assert_eq!(t.remaining(), 3);
        t.advance();
        assert_eq!(t.remaining(), 3);
    }

    #[test]
    fn test_take_full_width_of_u8() {
        let all: Vec<u8> = take(256, iota(0u8)).iter().collect();
        assert_eq!(all.len(), 256);
        assert_eq!(all[255], u8::MAX);
    }

    #[test]
    fn test_take_leaves_source_on_last_element() {
        let mut t = take(3, iota(0));
        t.advance().advance().advance();
        assert!(!t.has_current());
        assert_eq!(t.into_inner().current(), 2);
    }

    #[test]
    fn test_take_zero() {
        let t = take(0, iota(0));
        assert!(!t.has_current());
    }
}
