#![forbid(unsafe_code)]
//! iterable-algo: consuming algorithms and eager containers.
//!
//! Design intent:
//! - Algorithms take sequences by value and consume their own copy. Pass
//!   `&mut s` to consume the caller's.
//! - Containers are the only place a sequence's values get cached. The
//!   bounded path (`try_collect`) honours `IterConfig::materialize_limit`.

pub mod algorithms;
pub mod container;

pub use algorithms::{
    all, any, back, compare, copy, count, drop, end, equal, length, partial_compare, prod,
    prod_from, sum, sum_from,
};
pub use container::{List, Vector};
pub use iterable_core::{Error, IterConfig, Iterable, Result};
