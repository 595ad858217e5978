//! Elements of `s0`, then elements of `s1`.

use crate::Iterable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Concatenate<S0, S1> {
    s0: S0,
    s1: S1,
}

impl<S0, S1> Concatenate<S0, S1> {
    pub fn new(s0: S0, s1: S1) -> Self {
        Self { s0, s1 }
    }
}

pub fn concatenate<S0, S1>(s0: S0, s1: S1) -> Concatenate<S0, S1>
where
    S0: Iterable,
    S1: Iterable<Item = S0::Item>,
{
    Concatenate::new(s0, s1)
}

impl<S0, S1> Iterable for Concatenate<S0, S1>
where
    S0: Iterable,
    S1: Iterable<Item = S0::Item>,
{
    type Item = S0::Item;

    fn has_current(&self) -> bool {
        self.s0.has_current() || self.s1.has_current()
    }

    fn current(&self) -> S0::Item {
        if self.s0.has_current() {
            self.s0.current()
        } else {
            self.s1.current()
        }
    }

    fn advance(&mut self) -> &mut Self {
        if self.s0.has_current() {
            self.s0.advance();
        } else {
            self.s1.advance();
        }
        self
    }
}

/// Concatenate any number of sequences, left to right.
///
/// `chain!(a, b, c)` is `concatenate(a, concatenate(b, c))`.
#[macro_export]
macro_rules! chain {
    ($s:expr $(,)?) => {
        $s
    };
    ($s:expr, $($rest:expr),+ $(,)?) => {
        $crate::concatenate::concatenate($s, $crate::chain!($($rest),+))
    };
}
