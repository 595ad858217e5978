//! `{t}` and `{}`.

use std::fmt;
use std::marker::PhantomData;

use crate::Iterable;

/// Exactly one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Once<T> {
    t: T,
    live: bool,
}

pub fn once<T: Clone>(t: T) -> Once<T> {
    Once { t, live: true }
}

impl<T: Clone> Iterable for Once<T> {
    type Item = T;

    fn has_current(&self) -> bool {
        self.live
    }

    fn current(&self) -> T {
        self.t.clone()
    }

    fn advance(&mut self) -> &mut Self {
        self.live = false;
        self
    }
}

/// Zero elements.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> PartialEq for Empty<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Iterable for Empty<T> {
    type Item = T;

    fn has_current(&self) -> bool {
        false
    }

    fn current(&self) -> T {
        crate::exhausted()
    }

    fn advance(&mut self) -> &mut Self {
        self
    }
}
