#![forbid(unsafe_code)]
//! iterable: composable lazy sequences.
//!
//! Facade over the workspace crates:
//! - [`contract`]: the `Iterable` contract, `Erased`, `Iter`, config and errors
//! - [`ops`]: producers, combinators, `IterableExt`, operator sugar
//! - [`algo`]: consuming algorithms and eager containers
//! - [`numeric`]: numeric producers and truncated series
//!
//! ```ignore
//! use iterable::prelude::*;
//!
//! let odd = filter(|i: &i32| i % 2 == 1, iota(0));
//! assert!(equal(take(3, odd), array(&[1, 3, 5])));
//! ```

pub use iterable_algo as algo;
pub use iterable_core as contract;
pub use iterable_numeric as numeric;
pub use iterable_ops as ops;

pub use iterable_core::{Erased, Error, Iter, IterConfig, Iterable, Result};
pub use iterable_ops::{chain, impl_sequence_ops, merge};

pub mod prelude {
    pub use iterable_algo::{
        all, any, back, compare, copy, count, drop, end, equal, length, partial_compare, prod,
        prod_from, sum, sum_from, List, Vector,
    };
    pub use iterable_core::prelude::*;
    pub use iterable_numeric::{
        choose, epsilon, exp, factorial, pochhammer, power, power_from, Choose, Epsilon,
        Factorial, Pochhammer, Power,
    };
    pub use iterable_ops::*;
}
