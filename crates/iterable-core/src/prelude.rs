//! Convenient re-exports for downstream crates.

pub use crate::adapter::Iter;
pub use crate::config::IterConfig;
pub use crate::erased::Erased;
pub use crate::error::{Error, Result};
pub use crate::iterable::Iterable;
