use std::thread;
use std::time::{Duration, Instant};

/// Wrapping monotonic millisecond clock abstraction used across the stack.
///
/// - ticks_ms(): returns a monotonic millisecond counter that wraps at
///   `u32::MAX + 1` (MCU tick semantics)
/// - sleep(): sleeps for the provided duration (implementations may simulate)
/// - ticks_since(): helper to compute elapsed milliseconds from an epoch tick
pub trait Clock {
    fn ticks_ms(&self) -> u32;
    fn sleep(&self, d: Duration);

    /// Milliseconds elapsed since `epoch`, correct across tick wraparound.
    fn ticks_since(&self, epoch: u32) -> u32 {
        ticks_diff(self.ticks_ms(), epoch)
    }
}

/// Wraparound-safe tick difference `newer - older`.
///
/// Because the counter wraps modulo 2^32, a plain subtraction would be wrong
/// when `newer` has wrapped past zero while `older` has not. Wrapping
/// subtraction yields the true elapsed ticks as long as the real elapsed time
/// is below one full wrap period (~49.7 days at 1 kHz).
#[inline]
pub fn ticks_diff(newer: u32, older: u32) -> u32 {
    newer.wrapping_sub(older)
}

/// Default, real-time wrapping clock backed by std::time::Instant.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn ticks_ms(&self) -> u32 {
        // Truncation to u32 is the modular wrap.
        self.origin.elapsed().as_millis() as u32
    }

    #[inline]
    fn sleep(&self, d: Duration) {
        if d.is_zero() {
            return;
        }
        thread::sleep(d);
    }
}
