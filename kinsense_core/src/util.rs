//! Common time helpers for kinsense_core.

/// Number of milliseconds in one second.
pub const MILLIS_PER_SEC: f64 = 1_000.0;

/// Convert a millisecond tick count to seconds.
#[inline]
pub fn ticks_to_secs(ticks_ms: u32) -> f64 {
    f64::from(ticks_ms) / MILLIS_PER_SEC
}
