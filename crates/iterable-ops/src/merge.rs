//! Sorted union of two non-decreasing sequences, duplicating ties.
//!
//! On equal heads the preferred side is emitted and the preference flips,
//! so each of two equal values comes out exactly once. Unsorted inputs give
//! an unspecified interleaving but still every element exactly once.

use crate::Iterable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merge<S0, S1> {
    s0: S0,
    s1: S1,
    prefer_first: bool,
}

/// Which side the next element comes from.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

impl<S0, S1> Merge<S0, S1> {
    pub fn new(s0: S0, s1: S1) -> Self {
        Self {
            s0,
            s1,
            prefer_first: true,
        }
    }
}

pub fn merge<S0, S1>(s0: S0, s1: S1) -> Merge<S0, S1>
where
    S0: Iterable,
    S1: Iterable<Item = S0::Item>,
    S0::Item: PartialOrd,
{
    Merge::new(s0, s1)
}

impl<S0, S1> Merge<S0, S1>
where
    S0: Iterable,
    S1: Iterable<Item = S0::Item>,
    S0::Item: PartialOrd,
{
    fn side(&self) -> Side {
        match (self.s0.has_current(), self.s1.has_current()) {
            (true, false) => Side::First,
            (false, _) => Side::Second,
            (true, true) => {
                let (a, b) = (self.s0.current(), self.s1.current());
                if a < b {
                    Side::First
                } else if b < a {
                    Side::Second
                } else if self.prefer_first {
                    Side::First
                } else {
                    Side::Second
                }
            }
        }
    }

    fn tied(&self) -> bool {
        self.s0.has_current() && self.s1.has_current() && {
            let (a, b) = (self.s0.current(), self.s1.current());
            !(a < b) && !(b < a)
        }
    }
}

impl<S0, S1> Iterable for Merge<S0, S1>
where
    S0: Iterable,
    S1: Iterable<Item = S0::Item>,
    S0::Item: PartialOrd,
{
    type Item = S0::Item;

    fn has_current(&self) -> bool {
        self.s0.has_current() || self.s1.has_current()
    }

    fn current(&self) -> S0::Item {
        match self.side() {
            Side::First => self.s0.current(),
            Side::Second => self.s1.current(),
        }
    }

    fn advance(&mut self) -> &mut Self {
        if !self.has_current() {
            return self;
        }
        let side = self.side();
        if self.tied() {
            self.prefer_first = !self.prefer_first;
        }
        match side {
            Side::First => {
                self.s0.advance();
            }
            Side::Second => {
                self.s1.advance();
            }
        }
        self
    }
}

/// Merge any number of sorted sequences. `merge!(a, b, c)` is
/// `merge(a, merge(b, c))`.
#[macro_export]
macro_rules! merge {
    ($s:expr $(,)?) => {
        $s
    };
    ($s:expr, $($rest:expr),+ $(,)?) => {
        $crate::merge::merge($s, $crate::merge!($($rest),+))
    };
}
