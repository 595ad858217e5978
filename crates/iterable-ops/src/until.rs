//! Stop at the first element satisfying a predicate. Unlike `filter`, this
//! truncates instead of skipping.

use crate::Iterable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Until<P, S> {
    p: P,
    s: S,
}

impl<P, S> Until<P, S> {
    pub fn new(p: P, s: S) -> Self {
        Self { p, s }
    }
}

pub fn until<P, S>(p: P, s: S) -> Until<P, S>
where
    S: Iterable,
    P: Fn(&S::Item) -> bool,
{
    Until::new(p, s)
}

impl<P, S> Iterable for Until<P, S>
where
    S: Iterable,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn has_current(&self) -> bool {
        self.s.has_current() && !(self.p)(&self.s.current())
    }

    fn current(&self) -> S::Item {
        self.s.current()
    }

    fn advance(&mut self) -> &mut Self {
        if self.has_current() {
            self.s.advance();
        }
        self
    }
}
