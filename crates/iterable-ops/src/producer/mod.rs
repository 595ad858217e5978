//! Producers: sequences with no source sequence.

pub mod call;
pub mod constant;
pub mod interval;
pub mod iota;
pub mod once;
pub mod pointer;

pub use call::{call, Call};
pub use constant::{constant, Constant};
pub use interval::{interval, Interval};
pub use iota::{iota, iota_range, iota_step, Iota, IotaRange, One};
pub use once::{empty, once, Empty, Once};
pub use pointer::{array, null_terminated, pointer, NullTerminated, Pointer};
