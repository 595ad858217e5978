//! Zip-combine: `op(a0, b0), op(a1, b1), ...` until either side ends.
//!
//! Every lifted operator in [`crate::sugar`] is a `Binop` over a plain
//! function pointer from [`crate::functor`].

use crate::Iterable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binop<F, S0, S1> {
    op: F,
    s0: S0,
    s1: S1,
}

impl<F, S0, S1> Binop<F, S0, S1> {
    pub fn new(op: F, s0: S0, s1: S1) -> Self {
        Self { op, s0, s1 }
    }
}

pub fn binop<F, S0, S1, U>(op: F, s0: S0, s1: S1) -> Binop<F, S0, S1>
where
    S0: Iterable,
    S1: Iterable,
    F: Fn(S0::Item, S1::Item) -> U,
{
    Binop::new(op, s0, s1)
}

impl<F, S0, S1, U> Iterable for Binop<F, S0, S1>
where
    S0: Iterable,
    S1: Iterable,
    F: Fn(S0::Item, S1::Item) -> U,
{
    type Item = U;

    fn has_current(&self) -> bool {
        self.s0.has_current() && self.s1.has_current()
    }

    fn current(&self) -> U {
        (self.op)(self.s0.current(), self.s1.current())
    }

    fn advance(&mut self) -> &mut Self {
        if self.has_current() {
            self.s0.advance();
            self.s1.advance();
        }
        self
    }
}
