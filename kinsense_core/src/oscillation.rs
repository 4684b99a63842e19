//! Half-cycle detection over a live angle stream.
//!
//! The tracker is a small state machine: states are implicit in the
//! `(direction, last_equilibrium_ticks, max_amplitude)` tuple and there is
//! no terminal state. The state record is passed by exclusive ownership into
//! `update`, which returns the successor state plus an optional event; there
//! is no shared mutable state anywhere.

use kinsense_traits::ticks_diff;

use crate::config::OscillationCfg;
use crate::types::OscillationEvent;
use crate::util::ticks_to_secs;

/// Mutable record threaded through the per-sample update. Initialized once
/// at tracker start, mutated on every sample, never destroyed until the
/// tracking loop stops.
#[derive(Debug, Clone, Default)]
pub struct TrackerState {
    pub last_equilibrium_ticks: Option<u32>,
    pub max_amplitude_deg: f64,
    pub direction: Option<i8>,
}

/// Threshold-debounced zero-crossing detector.
///
/// A direction reversal observed *inside* the equilibrium band marks a
/// half-oscillation boundary; repeated in-band samples with an unchanged
/// direction never re-trigger, which keeps sensor noise near zero from
/// flooding the output. Sampling cadence is fixed by the caller: signals
/// faster than roughly half the sampling rate (Nyquist) are misdetected,
/// an accepted accuracy limitation.
#[derive(Debug, Clone)]
pub struct OscillationTracker {
    threshold_deg: f64,
}

impl OscillationTracker {
    pub fn new(cfg: &OscillationCfg) -> Self {
        Self {
            threshold_deg: cfg.equilibrium_threshold_deg,
        }
    }

    /// Consume one `(angle, ticks)` sample. Returns the successor state and
    /// an event when a half-cycle boundary was crossed.
    pub fn update(
        &self,
        mut state: TrackerState,
        angle_deg: f64,
        ticks_ms: u32,
    ) -> (TrackerState, Option<OscillationEvent>) {
        // Amplitude tracks the running peak unconditionally, every sample.
        if angle_deg.abs() > state.max_amplitude_deg {
            state.max_amplitude_deg = angle_deg.abs();
        }

        let new_direction: i8 = if angle_deg >= 0.0 { 1 } else { -1 };

        if angle_deg.abs() < self.threshold_deg {
            match state.direction {
                None => {
                    // First-ever entry into the band: no prior half-cycle to
                    // close, so just arm the state.
                    state.direction = Some(new_direction);
                    state.last_equilibrium_ticks = Some(ticks_ms);
                }
                Some(direction) if direction != new_direction => {
                    let event = state.last_equilibrium_ticks.map(|t0| OscillationEvent {
                        period_s: ticks_to_secs(ticks_diff(ticks_ms, t0)),
                        amplitude_deg: state.max_amplitude_deg,
                    });
                    state.last_equilibrium_ticks = Some(ticks_ms);
                    state.max_amplitude_deg = 0.0;
                    state.direction = Some(new_direction);
                    return (state, event);
                }
                // Same direction, still within the band: the debounce. No
                // state change.
                Some(_) => {}
            }
        }
        (state, None)
    }
}
