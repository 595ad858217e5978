//! `c, c, c, ...`

use crate::Iterable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant<T> {
    c: T,
}

impl<T> Constant<T> {
    pub fn new(c: T) -> Self {
        Self { c }
    }
}

pub fn constant<T: Clone>(c: T) -> Constant<T> {
    Constant::new(c)
}

impl<T: Clone> Iterable for Constant<T> {
    type Item = T;

    fn has_current(&self) -> bool {
        true
    }

    fn current(&self) -> T {
        self.c.clone()
    }

    fn advance(&mut self) -> &mut Self {
        self
    }
}
