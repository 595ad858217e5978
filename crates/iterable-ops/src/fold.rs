//! Running accumulation as a sequence:
//! `seed, op(seed, s0), op(op(seed, s0), s1), ..., total`.
//!
//! A source of length `n` yields `n + 1` values. The last one is the eager
//! left fold of the whole source, which is what `sum_from`/`prod_from`
//! compute without the intermediate values.

use crate::Iterable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fold<F, S, T> {
    op: F,
    s: S,
    acc: T,
    done: bool,
}

impl<F, S, T> Fold<F, S, T> {
    pub fn new(op: F, s: S, seed: T) -> Self {
        Self {
            op,
            s,
            acc: seed,
            done: false,
        }
    }
}

pub fn fold<F, S, T>(op: F, s: S, seed: T) -> Fold<F, S, T>
where
    S: Iterable,
    T: Clone,
    F: Fn(T, S::Item) -> T,
{
    Fold::new(op, s, seed)
}

impl<F, S, T> Iterable for Fold<F, S, T>
where
    S: Iterable,
    T: Clone,
    F: Fn(T, S::Item) -> T,
{
    type Item = T;

    fn has_current(&self) -> bool {
        !self.done
    }

    fn current(&self) -> T {
        self.acc.clone()
    }

    fn advance(&mut self) -> &mut Self {
        if self.done {
            return self;
        }
        if self.s.has_current() {
            self.acc = (self.op)(self.acc.clone(), self.s.current());
            self.s.advance();
        } else {
            self.done = true;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, empty, iota, take};

    #[test]
    fn test_fold_partial_sums() {
        let i = [1, 2, 3, 4];
        let f = fold(|t: i32, x: i32| t + x, array(&i), 0);
        assert_eq!(f.iter().collect::<Vec<_>>(), vec![0, 1, 3, 6, 10]);
    }

    #[test]
    fn test_fold_empty_source_yields_seed() {
        let mut f = fold(|t: i32, x: i32| t * x, empty(), 7);
        assert!(f.has_current());
        assert_eq!(f.current(), 7);
        f.advance();
        assert!(!f.has_current());
        f.advance();
        assert!(!f.has_current());
    }

    #[test]
    fn test_fold_unbounded_source() {
        let mut f = fold(|t: u64, x: u64| t * x, iota(1u64), 1);
        for _ in 0..5 {
            f.advance();
        }
        assert_eq!(f.current(), 120);
    }

    #[test]
    fn test_fold_last_matches_eager() {
        let f = fold(|t: i64, x: i64| t - x, take(5, iota(1i64)), 100);
        let last = f.iter().last();
        assert_eq!(last, Some((1..=5).fold(100, |t, x| t - x)));
    }
}
