//! Blocking presence-edge timing.

use std::time::Duration;

use eyre::WrapErr;
use kinsense_traits::{Clock, PresenceSensor, ticks_diff};

use crate::error::{AbortReason, MotionError, Result};
use crate::hw_error::map_hw_error;
use crate::util::ticks_to_secs;

/// Times a single pass-through event from a binary presence signal.
///
/// `measure()` polls at a fixed cadence until the signal goes active (start
/// edge), then until it goes inactive again (end edge), and returns the
/// elapsed duration in seconds. There is no timeout: it blocks indefinitely
/// until the event completes or the cancel check latches.
pub struct MotionTimer<P: PresenceSensor, C: Clock> {
    sensor: P,
    clock: C,
    poll: Duration,
    cancel_check: Option<Box<dyn Fn() -> bool>>,
}

impl<P: PresenceSensor, C: Clock> MotionTimer<P, C> {
    pub fn new(sensor: P, clock: C, poll_ms: u64) -> Self {
        Self {
            sensor,
            clock,
            poll: Duration::from_millis(poll_ms.max(1)),
            cancel_check: None,
        }
    }

    /// Install a cooperative cancellation check, polled once per iteration
    /// of the blocking wait. A latched cancel aborts the wait with no
    /// partial result.
    pub fn with_cancel_check(mut self, check: Box<dyn Fn() -> bool>) -> Self {
        self.cancel_check = Some(check);
        self
    }

    /// Block until one full presence event passes, returning its duration
    /// in seconds. Tick arithmetic is wraparound-safe; zero-length intervals
    /// are rejected here so downstream profile synthesis never divides by
    /// zero.
    pub fn measure(&mut self) -> Result<f64> {
        tracing::info!("waiting for presence start edge");
        self.wait_for_presence(true)?;
        let start = self.clock.ticks_ms();
        tracing::debug!(start_ticks = start, "presence start edge");

        self.wait_for_presence(false)?;
        let stop = self.clock.ticks_ms();
        let duration_s = ticks_to_secs(ticks_diff(stop, start));
        tracing::debug!(stop_ticks = stop, duration_s, "presence end edge");

        if duration_s <= 0.0 {
            return Err(eyre::Report::new(MotionError::State(
                "zero-length presence interval".into(),
            )));
        }
        tracing::info!(duration_s, "presence interval measured");
        Ok(duration_s)
    }

    fn wait_for_presence(&mut self, wanted: bool) -> Result<()> {
        loop {
            if self.cancelled() {
                return Err(eyre::Report::new(MotionError::Abort(
                    AbortReason::Cancelled,
                )));
            }
            let present = self
                .sensor
                .read()
                .map_err(|e| eyre::Report::new(map_hw_error(&*e)))
                .wrap_err("reading presence sensor")?;
            if present == wanted {
                return Ok(());
            }
            self.clock.sleep(self.poll);
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel_check.as_ref().is_some_and(|check| check())
    }
}
