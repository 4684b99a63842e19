//! Pipeline orchestration: run the blocking measurement/tracking loops
//! until completion, cancellation, or a hardware fault.

use std::time::Duration;

use eyre::WrapErr;
use kinsense_traits::{AngleSensor, Clock, PresenceSensor};

use crate::config::{OscillationCfg, ProfileCfg, TimingCfg};
use crate::error::{AbortReason, MotionError, Result};
use crate::hw_error::map_hw_error;
use crate::integrator::integrate;
use crate::oscillation::{OscillationTracker, TrackerState};
use crate::profile::synthesize_profile;
use crate::sampler::AngleSampler;
use crate::timer::MotionTimer;
use crate::types::{MotionReport, OscillationEvent};

/// How angle sampling should be orchestrated
#[derive(Debug, Clone, Copy)]
pub enum SamplingMode {
    /// Read inside the tracking loop at the configured cadence
    Direct,
    /// Rate-paced background sampler thread owning the sensor
    Paced,
}

/// Parameters for the linear-motion pipeline.
#[derive(Debug, Clone, Default)]
pub struct MotionParams {
    pub timing: TimingCfg,
    pub profile: ProfileCfg,
    /// Number of measurement cycles to run; 0 runs until cancelled.
    pub cycles: u32,
}

/// Parameters for the oscillation pipeline.
#[derive(Debug, Clone)]
pub struct OscillationParams {
    pub timing: TimingCfg,
    pub oscillation: OscillationCfg,
    pub mode: SamplingMode,
    /// Stop after this many emitted events; 0 runs until cancelled.
    pub max_events: u32,
}

impl Default for OscillationParams {
    fn default() -> Self {
        Self {
            timing: TimingCfg::default(),
            oscillation: OscillationCfg::default(),
            mode: SamplingMode::Direct,
            max_events: 0,
        }
    }
}

/// Run measurement cycles: time a presence event, synthesize the velocity
/// profile, integrate, and hand the report to the callback. Returns `Ok(())`
/// on cancellation (no partial report) and propagates hardware faults.
pub fn run_motion<P, C>(
    sensor: P,
    clock: C,
    cancel: Option<Box<dyn Fn() -> bool>>,
    params: MotionParams,
    mut on_report: impl FnMut(&MotionReport),
) -> Result<()>
where
    P: PresenceSensor,
    C: Clock + Clone,
{
    let mut timer = MotionTimer::new(sensor, clock.clone(), params.timing.presence_poll_ms);
    if let Some(check) = cancel {
        timer = timer.with_cancel_check(check);
    }

    let mut completed = 0u32;
    loop {
        let duration_s = match timer.measure() {
            Ok(d) => d,
            Err(e) if is_cancelled(&e) => {
                tracing::info!("motion measurement cancelled");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let series = synthesize_profile(
            duration_s,
            params.profile.num_samples,
            params.profile.zone_width_m,
        );
        let kinematics = integrate(&series);
        let report = MotionReport {
            duration_s,
            kinematics,
        };
        tracing::info!(
            duration_s,
            displacement_m = kinematics.displacement_m,
            avg_velocity_mps = kinematics.avg_velocity_mps,
            "measurement cycle complete"
        );
        on_report(&report);

        completed += 1;
        if params.cycles > 0 && completed >= params.cycles {
            return Ok(());
        }
        // Idle briefly so a lingering presence tail does not retrigger.
        clock.sleep(Duration::from_secs(1));
    }
}

/// Track half-oscillations until cancelled (or until `max_events`), handing
/// each `(period, amplitude)` event to the callback as it is detected.
pub fn track_oscillations<A, C>(
    sensor: A,
    clock: C,
    cancel: Option<Box<dyn Fn() -> bool>>,
    params: OscillationParams,
    mut on_event: impl FnMut(&OscillationEvent),
) -> Result<()>
where
    A: AngleSensor + Send + 'static,
    C: Clock + Clone + Send + Sync + 'static,
{
    let tracker = OscillationTracker::new(&params.oscillation);
    let mut state = TrackerState::default();
    let period = Duration::from_millis(params.timing.angle_sample_ms.max(1));
    let mut emitted = 0u32;
    let cancelled = || cancel.as_ref().is_some_and(|check| check());

    tracing::info!(mode = ?params.mode, "oscillation tracking start");
    match params.mode {
        SamplingMode::Direct => {
            let mut sensor = sensor;
            loop {
                if cancelled() {
                    tracing::info!("oscillation tracking cancelled");
                    return Ok(());
                }
                let angle_deg = sensor
                    .read()
                    .map_err(|e| eyre::Report::new(map_hw_error(&*e)))
                    .wrap_err("reading angle sensor")?;
                let ticks_ms = clock.ticks_ms();
                let (next, event) = tracker.update(state, angle_deg, ticks_ms);
                state = next;
                if let Some(event) = event {
                    tracing::debug!(
                        period_s = event.period_s,
                        amplitude_deg = event.amplitude_deg,
                        "half-cycle boundary"
                    );
                    on_event(&event);
                    emitted += 1;
                    if params.max_events > 0 && emitted >= params.max_events {
                        return Ok(());
                    }
                }
                clock.sleep(period);
            }
        }
        SamplingMode::Paced => {
            let sampler = AngleSampler::spawn(sensor, params.timing.angle_sample_ms, clock.clone());
            loop {
                if cancelled() {
                    tracing::info!("oscillation tracking cancelled");
                    return Ok(());
                }
                if let Some(sample) = sampler.latest() {
                    let (next, event) = tracker.update(state, sample.angle_deg, sample.ticks_ms);
                    state = next;
                    if let Some(event) = event {
                        tracing::debug!(
                            period_s = event.period_s,
                            amplitude_deg = event.amplitude_deg,
                            "half-cycle boundary"
                        );
                        on_event(&event);
                        emitted += 1;
                        if params.max_events > 0 && emitted >= params.max_events {
                            return Ok(());
                        }
                    }
                }
                // avoid busy spin between arrivals
                clock.sleep(period);
            }
        }
    }
}

fn is_cancelled(e: &eyre::Report) -> bool {
    matches!(
        e.downcast_ref::<MotionError>(),
        Some(MotionError::Abort(AbortReason::Cancelled))
    )
}
