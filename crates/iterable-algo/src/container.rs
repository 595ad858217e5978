//! Eager containers: cache a sequence's values once, replay them as a
//! sequence.
//!
//! `Vector` keeps its buffer and moves a cursor, so it can be `reset` and
//! traversed again. `List` pops as it advances.

use std::collections::VecDeque;

use iterable_core::iterable::exhausted;
use iterable_core::{Error, IterConfig, Iterable, Result};

/// Drain `s` into `push`, refusing to go past `limit` elements.
fn drain_bounded<S, F>(mut s: S, limit: Option<usize>, mut push: F) -> Result<usize>
where
    S: Iterable,
    F: FnMut(S::Item),
{
    let mut n = 0usize;
    while s.has_current() {
        if let Some(limit) = limit {
            if n == limit {
                #[cfg(feature = "tracing")]
                tracing::debug!(limit, "materialization limit hit");
                return Err(Error::MaterializeLimit { limit });
            }
        }
        push(s.current());
        s.advance();
        n += 1;
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(len = n, "materialized sequence");
    Ok(n)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vector<T> {
    items: Vec<T>,
    pos: usize,
}

impl<T> Vector<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            pos: 0,
        }
    }

    /// Cache every element of `s`. Never returns for an unbounded `s`; use
    /// [`Vector::try_collect`] when the length is not known to be finite.
    pub fn from_iterable<S: Iterable<Item = T>>(mut s: S) -> Self {
        let mut items = Vec::new();
        while s.has_current() {
            items.push(s.current());
            s.advance();
        }
        Self { items, pos: 0 }
    }

    /// Cache `s`, failing once more than `cfg.materialize_limit` elements
    /// have been seen.
    pub fn try_collect<S: Iterable<Item = T>>(s: S, cfg: &IterConfig) -> Result<Self> {
        let mut items = Vec::new();
        drain_bounded(s, cfg.materialize_limit, |t| items.push(t))?;
        Ok(Self { items, pos: 0 })
    }

    /// Rewind to the first element.
    pub fn reset(&mut self) -> &mut Self {
        self.pos = 0;
        self
    }

    pub fn push_back(&mut self, t: T) {
        self.items.push(t);
    }

    /// All cached elements, including those already passed.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Elements not yet passed.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.pos
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items, pos: 0 }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Clone> Iterable for Vector<T> {
    type Item = T;

    fn has_current(&self) -> bool {
        self.pos < self.items.len()
    }

    fn current(&self) -> T {
        match self.items.get(self.pos) {
            Some(t) => t.clone(),
            None => exhausted(),
        }
    }

    fn advance(&mut self) -> &mut Self {
        if self.has_current() {
            self.pos += 1;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct List<T> {
    items: VecDeque<T>,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn from_iterable<S: Iterable<Item = T>>(mut s: S) -> Self {
        let mut items = VecDeque::new();
        while s.has_current() {
            items.push_back(s.current());
            s.advance();
        }
        Self { items }
    }

    pub fn try_collect<S: Iterable<Item = T>>(s: S, cfg: &IterConfig) -> Result<Self> {
        let mut items = VecDeque::new();
        drain_bounded(s, cfg.materialize_limit, |t| items.push_back(t))?;
        Ok(Self { items })
    }

    pub fn push_back(&mut self, t: T) {
        self.items.push_back(t);
    }

    pub fn push_front(&mut self, t: T) {
        self.items.push_front(t);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> Iterable for List<T> {
    type Item = T;

    fn has_current(&self) -> bool {
        !self.items.is_empty()
    }

    fn current(&self) -> T {
        match self.items.front() {
            Some(t) => t.clone(),
            None => exhausted(),
        }
    }

    fn advance(&mut self) -> &mut Self {
        self.items.pop_front();
        self
    }
}

iterable_ops::impl_sequence_ops! {
    [T] Vector<T>;
    [T] List<T>;
}
