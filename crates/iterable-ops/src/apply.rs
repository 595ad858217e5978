//! `f(s0), f(s1), f(s2), ...`

use crate::Iterable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apply<F, S> {
    f: F,
    s: S,
}

impl<F, S> Apply<F, S> {
    pub fn new(f: F, s: S) -> Self {
        Self { f, s }
    }
}

pub fn apply<F, S, U>(f: F, s: S) -> Apply<F, S>
where
    S: Iterable,
    F: Fn(S::Item) -> U,
{
    Apply::new(f, s)
}

impl<F, S, U> Iterable for Apply<F, S>
where
    S: Iterable,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    fn has_current(&self) -> bool {
        self.s.has_current()
    }

    fn current(&self) -> U {
        (self.f)(self.s.current())
    }

    fn advance(&mut self) -> &mut Self {
        self.s.advance();
        self
    }
}
