#![forbid(unsafe_code)]
//! iterable-core: the sequence contract shared by every other crate.
//!
//! Design intent:
//! - A sequence is a plain value exposing `has_current`, `current` and
//!   `advance`. Composition happens through generics; there is no runtime
//!   dispatch unless a caller opts into [`Erased`].
//! - This crate holds no combinators. Producers and combinators live in
//!   `iterable-ops`, consuming algorithms in `iterable-algo`.
//! - Errors only exist at the edges (config, bounded materialization).

pub mod adapter;
pub mod config;
pub mod erased;
pub mod error;
pub mod iterable;
pub mod prelude;

pub use adapter::Iter;
pub use config::IterConfig;
pub use erased::Erased;
pub use error::{Error, Result};
pub use iterable::Iterable;
