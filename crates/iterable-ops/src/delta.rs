//! First differences: `d(s1, s0), d(s2, s1), ...`.
//!
//! Construction reads one element ahead, so a source of length `n` yields
//! `n - 1` values (none for `n <= 1`).

use std::ops::Sub;

use crate::functor;
use crate::Iterable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delta<S, D, T> {
    s: S,
    d: D,
    prev: Option<T>,
}

impl<S, D> Delta<S, D, S::Item>
where
    S: Iterable,
{
    pub fn new(mut s: S, d: D) -> Self {
        let prev = s.get();
        s.advance();
        Self { s, d, prev }
    }
}

/// Differences under a caller-supplied `d(current, previous)`.
pub fn delta_with<S, D, U>(s: S, d: D) -> Delta<S, D, S::Item>
where
    S: Iterable,
    S::Item: Clone,
    D: Fn(S::Item, S::Item) -> U,
{
    Delta::new(s, d)
}

type Diff<T> = fn(T, T) -> T;

/// `current - previous`.
pub fn delta<S>(s: S) -> Delta<S, Diff<S::Item>, S::Item>
where
    S: Iterable,
    S::Item: Clone + Sub<Output = S::Item>,
{
    let d: Diff<S::Item> = functor::sub;
    Delta::new(s, d)
}

/// Rises only: `max(current - previous, 0)`.
pub fn uptick<S>(s: S) -> Delta<S, Diff<S::Item>, S::Item>
where
    S: Iterable,
    S::Item: Clone + Sub<Output = S::Item> + PartialOrd + Default,
{
    let d: Diff<S::Item> = functor::uptick;
    Delta::new(s, d)
}

/// Falls only: `min(current - previous, 0)`.
pub fn downtick<S>(s: S) -> Delta<S, Diff<S::Item>, S::Item>
where
    S: Iterable,
    S::Item: Clone + Sub<Output = S::Item> + PartialOrd + Default,
{
    let d: Diff<S::Item> = functor::downtick;
    Delta::new(s, d)
}

impl<S, D, U> Iterable for Delta<S, D, S::Item>
where
    S: Iterable,
    S::Item: Clone,
    D: Fn(S::Item, S::Item) -> U,
{
    type Item = U;

    fn has_current(&self) -> bool {
        self.prev.is_some() && self.s.has_current()
    }

    fn current(&self) -> U {
        match &self.prev {
            Some(p) => (self.d)(self.s.current(), p.clone()),
            None => crate::exhausted(),
        }
    }

    fn advance(&mut self) -> &mut Self {
        if self.has_current() {
            self.prev = Some(self.s.current());
            self.s.advance();
        }
        self
    }
}
