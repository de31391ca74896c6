//! Deterministic exponential backoff.

use std::time::Duration;

/// Compute the delay to use after a failed check.
///
/// Doubles the previous delay until it passes `max / 2`, then clamps to
/// `max`. A zero previous delay yields the one-second baseline; ordinary
/// operation starts from the configured interval and never passes zero.
pub fn next_delay(previous: Duration, max: Duration) -> Duration {
    if previous == Duration::ZERO {
        return Duration::from_secs(1);
    }
    if previous > max / 2 {
        return max;
    }
    previous * 2
}
