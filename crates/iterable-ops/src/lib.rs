#![forbid(unsafe_code)]
//! iterable-ops: producers and combinators over the `Iterable` contract.
//!
//! Design intent:
//! - Every combinator owns its source sequence(s) by value. Nothing here
//!   borrows a sequence or a function, so a composed expression can be
//!   returned from a function freely.
//! - Composition is static: `take(3, filter(p, iota(0)))` is a nested value
//!   type with no boxing.
//! - Operator sugar (`+`, `-`, ...) is implemented per type by
//!   [`impl_sequence_ops!`], which other crates invoke for their own
//!   sequence types.

pub mod apply;
pub mod binop;
pub mod concatenate;
pub mod cycle;
pub mod delta;
pub mod ext;
pub mod filter;
pub mod fold;
pub mod functor;
pub mod merge;
pub mod producer;
pub mod scan;
pub mod sugar;
pub mod take;
pub mod until;

pub use iterable_core::Iterable;

pub use apply::{apply, Apply};
pub use binop::{binop, Binop};
pub use concatenate::{concatenate, Concatenate};
pub use cycle::{cycle, repeat, Cycle};
pub use delta::{delta, delta_with, downtick, uptick, Delta};
pub use ext::IterableExt;
pub use filter::{filter, mask, when, Filter, Mask};
pub use fold::{fold, Fold};
pub use merge::{merge, Merge};
pub use producer::{
    array, call, constant, empty, interval, iota, iota_range, iota_step, null_terminated, once,
    pointer, Call, Constant, Empty, Interval, Iota, IotaRange, NullTerminated, Once, One, Pointer,
};
pub use scan::{scan, Scan};
pub use take::{take, Take};
pub use until::{until, Until};

pub(crate) use iterable_core::iterable::exhausted;
