//! Adapt any std iterator into a sequence by holding one element of
//! look-ahead. The iterator must be `Clone` for the sequence to keep value
//! semantics.

use crate::Iterable;

#[derive(Debug, Clone)]
pub struct Interval<I: Iterator> {
    iter: I,
    head: Option<I::Item>,
}

impl<I: Iterator> Interval<I> {
    pub fn new(mut iter: I) -> Self {
        let head = iter.next();
        Self { iter, head }
    }
}

pub fn interval<C: IntoIterator>(c: C) -> Interval<C::IntoIter> {
    Interval::new(c.into_iter())
}

impl<I> Iterable for Interval<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn has_current(&self) -> bool {
        self.head.is_some()
    }

    fn current(&self) -> I::Item {
        match &self.head {
            Some(t) => t.clone(),
            None => crate::exhausted(),
        }
    }

    fn advance(&mut self) -> &mut Self {
        if self.head.is_some() {
            self.head = self.iter.next();
        }
        self
    }
}
