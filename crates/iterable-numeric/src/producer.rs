//! Unbounded numeric recurrences, plus the bounded binomial row.

use std::ops::{Add, Mul};

use iterable_core::Iterable;
use iterable_ops::One;

/// Geometric progression `tn, tn*t, tn*t^2, ...`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Power<T> {
    t: T,
    tn: T,
}

/// `1, t, t^2, ...`
pub fn power<T: One>(t: T) -> Power<T> {
    Power { t, tn: T::one() }
}

/// `tn, tn*t, tn*t^2, ...`
pub fn power_from<T>(t: T, tn: T) -> Power<T> {
    Power { t, tn }
}

impl<T> Iterable for Power<T>
where
    T: Clone + Mul<Output = T>,
{
    type Item = T;

    fn has_current(&self) -> bool {
        true
    }

    fn current(&self) -> T {
        self.tn.clone()
    }

    fn advance(&mut self) -> &mut Self {
        self.tn = self.tn.clone() * self.t.clone();
        self
    }
}

/// `0!, 1!, 2!, ...` = `1, 1, 2, 6, 24, ...`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factorial<T> {
    k: T,
    acc: T,
}

pub fn factorial<T: One>() -> Factorial<T> {
    Factorial {
        k: T::one(),
        acc: T::one(),
    }
}

impl<T> Iterable for Factorial<T>
where
    T: Clone + One + Add<Output = T> + Mul<Output = T>,
{
    type Item = T;

    fn has_current(&self) -> bool {
        true
    }

    fn current(&self) -> T {
        self.acc.clone()
    }

    fn advance(&mut self) -> &mut Self {
        self.acc = self.acc.clone() * self.k.clone();
        self.k = self.k.clone() + T::one();
        self
    }
}

/// Row `n` of Pascal's triangle: `C(n, 0), C(n, 1), ..., C(n, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choose {
    n: u64,
    k: u64,
    nk: u64,
}

pub fn choose(n: u64) -> Choose {
    Choose { n, k: 0, nk: 1 }
}

impl Iterable for Choose {
    type Item = u64;

    fn has_current(&self) -> bool {
        self.k <= self.n
    }

    fn current(&self) -> u64 {
        self.nk
    }

    fn advance(&mut self) -> &mut Self {
        if self.k <= self.n {
            let next = u128::from(self.nk) * u128::from(self.n - self.k) / u128::from(self.k + 1);
            // saturates past u64::MAX
            self.nk = u64::try_from(next).unwrap_or(u64::MAX);
            self.k += 1;
        }
        self
    }
}

/// Generalized Pochhammer symbol `x, x(x+k), x(x+k)(x+2k), ...`.
/// `k = 1` is the rising factorial, `k = -1` the falling one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pochhammer<T> {
    x: T,
    k: T,
    xk: T,
    offset: T,
}

pub fn pochhammer<T: Clone + Default>(x: T, k: T) -> Pochhammer<T> {
    Pochhammer {
        xk: x.clone(),
        x,
        k,
        offset: T::default(),
    }
}

impl<T> Iterable for Pochhammer<T>
where
    T: Clone + Add<Output = T> + Mul<Output = T>,
{
    type Item = T;

    fn has_current(&self) -> bool {
        true
    }

    fn current(&self) -> T {
        self.xk.clone()
    }

    fn advance(&mut self) -> &mut Self {
        self.offset = self.offset.clone() + self.k.clone();
        self.xk = self.xk.clone() * (self.x.clone() + self.offset.clone());
        self
    }
}

iterable_ops::impl_sequence_ops! {
    [T] Power<T>;
    [T] Factorial<T>;
    [T] Pochhammer<T>;
    [] Choose;
}
