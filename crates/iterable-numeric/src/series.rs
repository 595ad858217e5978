//! Truncated series.

use iterable_algo::sum_from;
use iterable_core::{IterConfig, Iterable};

use crate::producer::{factorial, power};

/// Terms of `s` up to, not including, the first one with magnitude at or
/// below the tolerance. At most `max_terms` terms come through; the count
/// lives in the value, so every copy has its own budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epsilon<S> {
    s: S,
    tolerance: f64,
    max_terms: usize,
    n: usize,
}

impl<S> Epsilon<S> {
    pub fn new(s: S, tolerance: f64, max_terms: usize) -> Self {
        Self {
            s,
            tolerance,
            max_terms,
            n: 0,
        }
    }

    /// Terms passed so far.
    pub fn terms(&self) -> usize {
        self.n
    }
}

pub fn epsilon<S>(s: S, cfg: &IterConfig) -> Epsilon<S>
where
    S: Iterable,
    S::Item: Into<f64>,
{
    Epsilon::new(s, cfg.series_tolerance, cfg.series_max_terms)
}

impl<S> Iterable for Epsilon<S>
where
    S: Iterable,
    S::Item: Into<f64>,
{
    type Item = S::Item;

    fn has_current(&self) -> bool {
        self.n < self.max_terms
            && self.s.has_current()
            && Into::<f64>::into(self.s.current()).abs() > self.tolerance
    }

    fn current(&self) -> S::Item {
        self.s.current()
    }

    fn advance(&mut self) -> &mut Self {
        if self.has_current() {
            self.s.advance();
            self.n += 1;
            #[cfg(feature = "tracing")]
            if !self.has_current() {
                tracing::trace!(terms = self.n, "epsilon: series truncated");
            }
        }
        self
    }
}

iterable_ops::impl_sequence_ops! {
    [S] Epsilon<S>;
}

/// `e^x` as `sum(x^n / n!)`, truncated per `cfg`.
pub fn exp(x: f64, cfg: &IterConfig) -> f64 {
    sum_from(epsilon(power(x) / factorial::<f64>(), cfg), 0.0)
}
