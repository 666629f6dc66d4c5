//! Frame-time helpers.

use std::time::Duration;

/// Whether `elapsed` falls in the second half of a `2 * interval` period.
///
/// Pure function of time, so blinking needs no per-item state. A zero
/// interval never blinks.
#[must_use]
pub fn between_interval(elapsed: Duration, interval: Duration) -> bool {
    if interval.is_zero() {
        return false;
    }
    let period = interval.as_secs_f64() * 2.0;
    elapsed.as_secs_f64() % period >= interval.as_secs_f64()
}
