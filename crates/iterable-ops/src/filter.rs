//! Skipping combinators.
//!
//! Both establish their invariant eagerly: after construction and after
//! every `advance`, the source is positioned on an element that passes (or
//! is exhausted). `current()` never has to search.

use crate::Iterable;

/// Elements satisfying a predicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filter<P, S> {
    p: P,
    s: S,
}

impl<P, S> Filter<P, S>
where
    S: Iterable,
    P: Fn(&S::Item) -> bool,
{
    pub fn new(p: P, s: S) -> Self {
        let mut f = Self { p, s };
        f.skip();
        f
    }

    fn skip(&mut self) {
        while self.s.has_current() && !(self.p)(&self.s.current()) {
            self.s.advance();
        }
    }
}

pub fn filter<P, S>(p: P, s: S) -> Filter<P, S>
where
    S: Iterable,
    P: Fn(&S::Item) -> bool,
{
    Filter::new(p, s)
}

/// Alias of [`filter`]: the elements of `s` when `p` holds.
pub fn when<P, S>(p: P, s: S) -> Filter<P, S>
where
    S: Iterable,
    P: Fn(&S::Item) -> bool,
{
    Filter::new(p, s)
}

impl<P, S> Iterable for Filter<P, S>
where
    S: Iterable,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn has_current(&self) -> bool {
        self.s.has_current()
    }

    fn current(&self) -> S::Item {
        self.s.current()
    }

    fn advance(&mut self) -> &mut Self {
        if self.s.has_current() {
            self.s.advance();
            self.skip();
        }
        self
    }
}

/// Elements of `s` at positions where the parallel sequence `m` is true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mask<S, M> {
    s: S,
    m: M,
}

impl<S, M> Mask<S, M>
where
    S: Iterable,
    M: Iterable<Item = bool>,
{
    pub fn new(s: S, m: M) -> Self {
        let mut k = Self { s, m };
        k.skip();
        k
    }

    fn live(&self) -> bool {
        self.s.has_current() && self.m.has_current()
    }

    fn skip(&mut self) {
        while self.live() && !self.m.current() {
            self.s.advance();
            self.m.advance();
        }
    }
}

pub fn mask<S, M>(s: S, m: M) -> Mask<S, M>
where
    S: Iterable,
    M: Iterable<Item = bool>,
{
    Mask::new(s, m)
}

impl<S, M> Iterable for Mask<S, M>
where
    S: Iterable,
    M: Iterable<Item = bool>,
{
    type Item = S::Item;

    fn has_current(&self) -> bool {
        self.live()
    }

    fn current(&self) -> S::Item {
        self.s.current()
    }

    fn advance(&mut self) -> &mut Self {
        if self.live() {
            self.s.advance();
            self.m.advance();
            self.skip();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, constant, iota, take};

    #[test]
    fn test_filter_odd() {
        let mut a = filter(|i: &i32| i % 2 == 1, iota(0));
        let a2 = a.clone();

        assert!(a.has_current());
        assert_eq!(a.current(), 1);
        a.advance();
        assert_eq!(a.current(), 3);
        a.advance();
        assert_eq!(a.current(), 5);
        assert_eq!(a2.current(), 1);
    }

    #[test]
    fn test_filter_keeps_first_element_when_it_passes() {
        let a = filter(|i: &i32| *i >= 0, iota(0));
        assert_eq!(a.current(), 0);
    }

    #[test]
    fn test_filter_nothing_passes() {
        let i = [2, 4, 6];
        let mut a = filter(|i: &i32| i % 2 == 1, array(&i));
        assert!(!a.has_current());
        a.advance();
        assert!(!a.has_current());
    }

    #[test]
    fn test_when_is_filter() {
        let a = when(|i: &i32| *i > 2, iota(0));
        assert_eq!(a.current(), 3);
    }

    #[test]
    fn test_mask() {
        let s = [1, 2, 3, 4, 5];
        let m = [true, false, false, true, true];
        let mut k = mask(array(&s), array(&m));
        assert_eq!(k.current(), 1);
        k.advance();
        assert_eq!(k.current(), 4);
        k.advance();
        assert_eq!(k.current(), 5);
        k.advance();
        assert!(!k.has_current());
    }

    #[test]
    fn test_mask_ends_with_shorter_mask() {
        let m = [false, true];
        let k = mask(iota(10), array(&m));
        assert_eq!(k.current(), 11);
        let mut k2 = k;
        k2.advance();
        assert!(!k2.has_current());
    }

    #[test]
    fn test_mask_all_false_over_unbounded_mask_is_bounded_by_source() {
        let mut k = mask(take(3, iota(0)), constant(false));
        assert!(!k.has_current());
        k.advance();
        assert!(!k.has_current());
    }
}
