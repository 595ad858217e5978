//! Algorithms that drive a sequence to (or towards) exhaustion.

use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, Mul};

use iterable_core::Iterable;

/// Same elements in the same order, and both end together.
pub fn equal<S, T>(mut s: S, mut t: T) -> bool
where
    S: Iterable,
    T: Iterable,
    S::Item: PartialEq<T::Item>,
{
    loop {
        match (s.has_current(), t.has_current()) {
            (false, false) => return true,
            (true, true) => {
                if s.current() != t.current() {
                    return false;
                }
                s.advance();
                t.advance();
            }
            _ => return false,
        }
    }
}

/// Lexicographic order. A proper prefix is less.
pub fn compare<S, T>(mut s: S, mut t: T) -> Ordering
where
    S: Iterable,
    T: Iterable<Item = S::Item>,
    S::Item: Ord,
{
    loop {
        match (s.has_current(), t.has_current()) {
            (false, false) => return Ordering::Equal,
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            (true, true) => match s.current().cmp(&t.current()) {
                Ordering::Equal => {
                    s.advance();
                    t.advance();
                }
                ord => return ord,
            },
        }
    }
}

/// [`compare`] for partially ordered items; `None` at the first
/// incomparable pair.
pub fn partial_compare<S, T>(mut s: S, mut t: T) -> Option<Ordering>
where
    S: Iterable,
    T: Iterable,
    S::Item: PartialOrd<T::Item>,
{
    loop {
        match (s.has_current(), t.has_current()) {
            (false, false) => return Some(Ordering::Equal),
            (false, true) => return Some(Ordering::Less),
            (true, false) => return Some(Ordering::Greater),
            (true, true) => match s.current().partial_cmp(&t.current())? {
                Ordering::Equal => {
                    s.advance();
                    t.advance();
                }
                ord => return Some(ord),
            },
        }
    }
}

/// `n` plus the number of elements in `s`, so that
/// `length(s, length(t, 0)) == length(s, 0) + length(t, 0)`.
pub fn length<S: Iterable>(mut s: S, mut n: usize) -> usize {
    while s.has_current() {
        n += 1;
        s.advance();
    }
    n
}

pub fn count<S: Iterable>(s: S) -> usize {
    length(s, 0)
}

/// Skip at most `n` elements.
pub fn drop<S: Iterable>(mut s: S, mut n: usize) -> S {
    while n > 0 && s.has_current() {
        s.advance();
        n -= 1;
    }
    s
}

/// The position of the last element, or `s` unchanged if it is empty.
pub fn back<S: Iterable + Clone>(mut s: S) -> S {
    if !s.has_current() {
        return s;
    }
    loop {
        let last = s.clone();
        s.advance();
        if !s.has_current() {
            return last;
        }
    }
}

/// `s` fully advanced.
pub fn end<S: Iterable>(mut s: S) -> S {
    while s.has_current() {
        s.advance();
    }
    s
}

/// Stops at the first `false`. True for an empty sequence.
pub fn all<S: Iterable<Item = bool>>(mut s: S) -> bool {
    while s.has_current() {
        if !s.current() {
            return false;
        }
        s.advance();
    }
    true
}

/// Stops at the first `true`. False for an empty sequence.
pub fn any<S: Iterable<Item = bool>>(mut s: S) -> bool {
    while s.has_current() {
        if s.current() {
            return true;
        }
        s.advance();
    }
    false
}

pub fn sum<S, U>(s: S) -> U
where
    S: Iterable,
    U: Sum<S::Item>,
{
    s.iter().sum()
}

pub fn prod<S, U>(s: S) -> U
where
    S: Iterable,
    U: Product<S::Item>,
{
    s.iter().product()
}

/// `seed + s0 + s1 + ...`, left to right.
pub fn sum_from<S, T>(mut s: S, seed: T) -> T
where
    S: Iterable,
    T: Add<S::Item, Output = T>,
{
    let mut t = seed;
    while s.has_current() {
        t = t + s.current();
        s.advance();
    }
    t
}

/// `seed * s0 * s1 * ...`, left to right.
pub fn prod_from<S, T>(mut s: S, seed: T) -> T
where
    S: Iterable,
    T: Mul<S::Item, Output = T>,
{
    let mut t = seed;
    while s.has_current() {
        t = t * s.current();
        s.advance();
    }
    t
}

/// Write elements of `s` into the slots yielded by `out` until either runs
/// out. Returns what is left of both.
pub fn copy<'a, S, O, T>(mut s: S, mut out: O) -> (S, O)
where
    S: Iterable<Item = T>,
    O: Iterator<Item = &'a mut T>,
    T: 'a,
{
    while s.has_current() {
        match out.next() {
            Some(slot) => {
                *slot = s.current();
                s.advance();
            }
            None => break,
        }
    }
    (s, out)
}
