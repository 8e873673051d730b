//! Process-wide time base for elapsed-time stamps

use std::sync::OnceLock;
use std::time::{Duration, Instant};

static START: OnceLock<Instant> = OnceLock::new();

/// Time elapsed since the first emitted message of this process.
///
/// The start instant is captured on the first call and never reset. If the
/// clock reads back the captured instant exactly (granularity collision on
/// the very first emission), the result is nudged to one nanosecond so the
/// first delta is strictly positive.
pub(crate) fn elapsed() -> Duration {
    let start = *START.get_or_init(Instant::now);
    let elapsed = start.elapsed();
    if elapsed.is_zero() {
        Duration::from_nanos(1)
    } else {
        elapsed
    }
}
