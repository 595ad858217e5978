//! Wall-clock timing of repeated calls.

use std::time::{Duration, Instant};

/// Time `n` calls to `f`.
pub fn time<F: FnMut()>(mut f: F, n: usize) -> Duration {
    let start = Instant::now();
    for _ in 0..n {
        f();
    }
    start.elapsed()
}
