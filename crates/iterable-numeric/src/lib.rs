#![forbid(unsafe_code)]
//! iterable-numeric: numeric producers and the series built from them.
//!
//! Design intent:
//! - Each producer is a one- or two-variable recurrence exposed through the
//!   plain `Iterable` contract, so it composes with every combinator.
//! - Series truncation (`epsilon`) is driven by `IterConfig` and keeps its
//!   term counter inside the sequence value, one per traversal.

pub mod producer;
pub mod series;

pub use producer::{
    choose, factorial, pochhammer, power, power_from, Choose, Factorial, Pochhammer, Power,
};
pub use series::{epsilon, exp, Epsilon};
