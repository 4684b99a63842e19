//! Half-cycle detection on scripted waveforms, both through the tracker
//! state machine directly and through the blocking tracking loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use kinsense_core::mocks::ScriptedAngle;
use kinsense_core::runner::{OscillationParams, SamplingMode, track_oscillations};
use kinsense_core::{OscillationCfg, OscillationTracker, TimingCfg, TrackerState};

use kinsense_traits::Clock;

#[derive(Clone, Default)]
struct FakeClock {
    ticks: Arc<AtomicU32>,
}

impl Clock for FakeClock {
    fn ticks_ms(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }
    fn sleep(&self, d: Duration) {
        let ms = d.as_millis() as u32;
        let old = self.ticks.load(Ordering::Relaxed);
        self.ticks.store(old.wrapping_add(ms), Ordering::Relaxed);
    }
}

/// 30-degree sine sampled at `step_ms`, `n` samples, period 2 s.
fn sine_samples(n: usize, step_ms: u32) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t_s = f64::from(step_ms) * (i as f64) / 1000.0;
            30.0 * (2.0 * std::f64::consts::PI * t_s / 2.0).sin()
        })
        .collect()
}

#[test]
fn clean_sine_emits_one_event_per_half_period() {
    let tracker = OscillationTracker::new(&OscillationCfg::default());
    let mut state = TrackerState::default();
    let mut events = Vec::new();

    // 6 seconds of a 2 s period sine at 50 ms cadence.
    for (i, angle) in sine_samples(121, 50).into_iter().enumerate() {
        let (next, event) = tracker.update(state, angle, (i as u32) * 50);
        state = next;
        if let Some(e) = event {
            events.push(e);
        }
    }

    // Five half-cycle boundaries follow the first arming crossing in 6 s.
    assert_eq!(events.len(), 5);
    for e in &events {
        assert!(
            (e.period_s - 1.0).abs() <= 0.1,
            "half-period {} should track the 1 s truth",
            e.period_s
        );
        assert!(
            (e.amplitude_deg - 30.0).abs() <= 1.0,
            "amplitude {} should match the true peak within sampling resolution",
            e.amplitude_deg
        );
    }
}

#[test]
fn in_band_noise_without_reversal_emits_nothing() {
    let tracker = OscillationTracker::new(&OscillationCfg::default());
    let mut state = TrackerState::default();
    for (i, angle) in [3.0, 4.0, 3.0, 4.5, 3.5, 4.0, 3.0].into_iter().enumerate() {
        let (next, event) = tracker.update(state, angle, (i as u32) * 50);
        assert!(event.is_none());
        state = next;
    }
}

#[test]
fn tracking_loop_direct_mode_reports_events_and_stops_at_max() {
    let sensor = ScriptedAngle::new(sine_samples(121, 50));
    let clock = FakeClock::default();
    let params = OscillationParams {
        timing: TimingCfg {
            presence_poll_ms: 100,
            angle_sample_ms: 50,
        },
        oscillation: OscillationCfg::default(),
        mode: SamplingMode::Direct,
        max_events: 3,
    };

    let mut events = Vec::new();
    track_oscillations(sensor, clock, None, params, |e| events.push(*e))
        .expect("tracking should stop cleanly at max_events");

    assert_eq!(events.len(), 3);
    for e in &events {
        assert!((e.period_s - 1.0).abs() <= 0.1);
        assert!((e.amplitude_deg - 30.0).abs() <= 1.0);
    }
}

#[test]
fn tracking_loop_cancellation_is_clean() {
    let sensor = ScriptedAngle::new(sine_samples(121, 50));
    let clock = FakeClock::default();
    let params = OscillationParams {
        mode: SamplingMode::Direct,
        ..OscillationParams::default()
    };

    let mut called = false;
    track_oscillations(
        sensor,
        clock,
        Some(Box::new(|| true)),
        params,
        |_| called = true,
    )
    .expect("cancellation must return Ok");
    assert!(!called, "no partial event on cancellation");
}

#[test]
fn exhausted_angle_stream_surfaces_as_hardware_error() {
    let sensor = ScriptedAngle::new([0.0, 10.0, 20.0]);
    let clock = FakeClock::default();
    let params = OscillationParams {
        mode: SamplingMode::Direct,
        ..OscillationParams::default()
    };

    let err = track_oscillations(sensor, clock, None, params, |_| {})
        .expect_err("script exhaustion must propagate");
    assert!(
        matches!(
            err.downcast_ref::<kinsense_core::MotionError>(),
            Some(kinsense_core::MotionError::Hardware(_))
        ),
        "unexpected error: {err}"
    );
}
