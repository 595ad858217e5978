//! Method-call spelling for the combinators, plus the comparison and logic
//! lifts that cannot be expressed as operator overloads.
//!
//! ```ignore
//! use iterable_ops::{iota, IterableExt};
//! let odd_squares = iota(0).filter(|i| i % 2 == 1).apply(|i| i * i).take(3);
//! ```

use std::ops::Sub;

use crate::apply::Apply;
use crate::binop::Binop;
use crate::concatenate::Concatenate;
use crate::cycle::Cycle;
use crate::delta::Delta;
use crate::filter::{Filter, Mask};
use crate::fold::Fold;
use crate::functor;
use crate::merge::Merge;
use crate::scan::Scan;
use crate::take::Take;
use crate::until::Until;
use crate::Iterable;

type Lift<A, B, U> = fn(A, B) -> U;

/// `Binop` produced by the element-wise comparison and logic lifts.
pub type Compare<S, J> =
    Binop<Lift<<S as Iterable>::Item, <J as Iterable>::Item, bool>, S, J>;

pub trait IterableExt: Iterable + Sized {
    fn apply<F, U>(self, f: F) -> Apply<F, Self>
    where
        F: Fn(Self::Item) -> U,
    {
        Apply::new(f, self)
    }

    fn filter<P>(self, p: P) -> Filter<P, Self>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(p, self)
    }

    fn when<P>(self, p: P) -> Filter<P, Self>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(p, self)
    }

    fn until<P>(self, p: P) -> Until<P, Self>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Until::new(p, self)
    }

    fn take(self, n: usize) -> Take<Self> {
        Take::new(n, self)
    }

    /// `self` then `other`.
    fn chain<J>(self, other: J) -> Concatenate<Self, J>
    where
        J: Iterable<Item = Self::Item>,
    {
        Concatenate::new(self, other)
    }

    fn merge<J>(self, other: J) -> Merge<Self, J>
    where
        J: Iterable<Item = Self::Item>,
        Self::Item: PartialOrd,
    {
        Merge::new(self, other)
    }

    fn zip_with<J, F, U>(self, other: J, op: F) -> Binop<F, Self, J>
    where
        J: Iterable,
        F: Fn(Self::Item, J::Item) -> U,
    {
        Binop::new(op, self, other)
    }

    fn fold<F, T>(self, op: F, seed: T) -> Fold<F, Self, T>
    where
        T: Clone,
        F: Fn(T, Self::Item) -> T,
    {
        Fold::new(op, self, seed)
    }

    fn delta(self) -> Delta<Self, Lift<Self::Item, Self::Item, Self::Item>, Self::Item>
    where
        Self::Item: Clone + Sub<Output = Self::Item>,
    {
        crate::delta::delta(self)
    }

    fn uptick(self) -> Delta<Self, Lift<Self::Item, Self::Item, Self::Item>, Self::Item>
    where
        Self::Item: Clone + Sub<Output = Self::Item> + PartialOrd + Default,
    {
        crate::delta::uptick(self)
    }

    fn downtick(self) -> Delta<Self, Lift<Self::Item, Self::Item, Self::Item>, Self::Item>
    where
        Self::Item: Clone + Sub<Output = Self::Item> + PartialOrd + Default,
    {
        crate::delta::downtick(self)
    }

    fn mask<M>(self, m: M) -> Mask<Self, M>
    where
        M: Iterable<Item = bool>,
    {
        Mask::new(self, m)
    }

    fn scan(self) -> Scan<Self>
    where
        Self: Clone,
    {
        Scan::new(self)
    }

    fn cycle(self) -> Cycle<Self>
    where
        Self: Clone,
    {
        Cycle::new(self)
    }

    /// Elements `< x`.
    fn below(self, x: Self::Item) -> Filter<impl Fn(&Self::Item) -> bool + Clone, Self>
    where
        Self::Item: PartialOrd + Clone,
    {
        Filter::new(move |v: &Self::Item| *v < x, self)
    }

    /// Elements `<= x`.
    fn at_most(self, x: Self::Item) -> Filter<impl Fn(&Self::Item) -> bool + Clone, Self>
    where
        Self::Item: PartialOrd + Clone,
    {
        Filter::new(move |v: &Self::Item| *v <= x, self)
    }

    /// Elements `> x`.
    fn above(self, x: Self::Item) -> Filter<impl Fn(&Self::Item) -> bool + Clone, Self>
    where
        Self::Item: PartialOrd + Clone,
    {
        Filter::new(move |v: &Self::Item| *v > x, self)
    }

    /// Elements `>= x`.
    fn at_least(self, x: Self::Item) -> Filter<impl Fn(&Self::Item) -> bool + Clone, Self>
    where
        Self::Item: PartialOrd + Clone,
    {
        Filter::new(move |v: &Self::Item| *v >= x, self)
    }

    /// Element-wise `<`.
    fn lt<J>(self, other: J) -> Compare<Self, J>
    where
        J: Iterable,
        Self::Item: PartialOrd<J::Item>,
    {
        let op: Lift<Self::Item, J::Item, bool> = functor::lt;
        Binop::new(op, self, other)
    }

    fn le<J>(self, other: J) -> Compare<Self, J>
    where
        J: Iterable,
        Self::Item: PartialOrd<J::Item>,
    {
        let op: Lift<Self::Item, J::Item, bool> = functor::le;
        Binop::new(op, self, other)
    }

    fn gt<J>(self, other: J) -> Compare<Self, J>
    where
        J: Iterable,
        Self::Item: PartialOrd<J::Item>,
    {
        let op: Lift<Self::Item, J::Item, bool> = functor::gt;
        Binop::new(op, self, other)
    }

    fn ge<J>(self, other: J) -> Compare<Self, J>
    where
        J: Iterable,
        Self::Item: PartialOrd<J::Item>,
    {
        let op: Lift<Self::Item, J::Item, bool> = functor::ge;
        Binop::new(op, self, other)
    }

    /// Element-wise `==`. Not `eq`: that name is `PartialEq`'s.
    fn eq_to<J>(self, other: J) -> Compare<Self, J>
    where
        J: Iterable,
        Self::Item: PartialEq<J::Item>,
    {
        let op: Lift<Self::Item, J::Item, bool> = functor::eq;
        Binop::new(op, self, other)
    }

    fn ne_to<J>(self, other: J) -> Compare<Self, J>
    where
        J: Iterable,
        Self::Item: PartialEq<J::Item>,
    {
        let op: Lift<Self::Item, J::Item, bool> = functor::ne;
        Binop::new(op, self, other)
    }

    fn and<J>(self, other: J) -> Compare<Self, J>
    where
        Self: Iterable<Item = bool>,
        J: Iterable<Item = bool>,
    {
        let op: Lift<Self::Item, J::Item, bool> = functor::and;
        Binop::new(op, self, other)
    }

    fn or<J>(self, other: J) -> Compare<Self, J>
    where
        Self: Iterable<Item = bool>,
        J: Iterable<Item = bool>,
    {
        let op: Lift<Self::Item, J::Item, bool> = functor::or;
        Binop::new(op, self, other)
    }
}

impl<S: Iterable> IterableExt for S {}
