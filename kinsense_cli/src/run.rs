//! Command execution: config mapping, sensor assembly, and pipeline runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use kinsense_core::error::Result as CoreResult;
use kinsense_core::runner::{self, MotionParams, OscillationParams, SamplingMode};
use kinsense_core::{MotionError, MotionReport, OscillationEvent};
use kinsense_traits::MonotonicClock;

use crate::cli::JSON_MODE;

/// CLI overrides for the motion pipeline; each takes precedence over config.
pub struct MotionOverrides {
    pub cycles: u32,
    pub zone_width: Option<f64>,
    pub samples: Option<usize>,
    pub poll_ms: Option<u64>,
}

/// CLI overrides for the oscillation pipeline.
pub struct PendulumOverrides {
    pub max_events: u32,
    pub threshold: Option<f64>,
    pub sample_ms: Option<u64>,
    pub paced: bool,
}

// Simulated presence window: ~2 s active at the default 100 ms poll.
const SIM_LEAD_POLLS: u32 = 2;
const SIM_ACTIVE_POLLS: u32 = 21;

// Simulated pendulum placeholder waveform.
const SIM_AMPLITUDE_DEG: f64 = 30.0;
const SIM_PERIOD_S: f64 = 2.0;

fn cancel_check(shutdown: &Arc<AtomicBool>) -> Option<Box<dyn Fn() -> bool>> {
    let shutdown = Arc::clone(shutdown);
    Some(Box::new(move || shutdown.load(Ordering::Relaxed)))
}

fn json_mode() -> bool {
    JSON_MODE.get().copied().unwrap_or(false)
}

pub fn run_motion(
    cfg: &kinsense_config::Config,
    ov: MotionOverrides,
    shutdown: &Arc<AtomicBool>,
) -> CoreResult<()> {
    let mut params = MotionParams {
        timing: (&cfg.timing).into(),
        profile: (&cfg.profile).into(),
        cycles: ov.cycles,
    };
    if let Some(ms) = ov.poll_ms {
        params.timing.presence_poll_ms = ms;
    }
    if let Some(z) = ov.zone_width {
        params.profile.zone_width_m = z;
    }
    if let Some(n) = ov.samples {
        params.profile.num_samples = n;
    }
    if params.profile.num_samples < 2 {
        return Err(MotionError::Config("--samples must be >= 2".into()).into());
    }
    if !(params.profile.zone_width_m.is_finite() && params.profile.zone_width_m > 0.0) {
        return Err(MotionError::Config("--zone-width must be > 0".into()).into());
    }

    let json = json_mode();
    let on_report = move |r: &MotionReport| print_report(r, json);

    #[cfg(all(feature = "hardware", target_os = "linux"))]
    let sensor = {
        let sensor = kinsense_hardware::HardwarePresence::new(cfg.pins.pir_in).map_err(|e| {
            eyre::Report::new(MotionError::HardwareFault(e.to_string()))
                .wrap_err("opening PIR input pin")
        })?;
        tracing::info!(pin = cfg.pins.pir_in, "PIR input ready");
        sensor
    };
    #[cfg(not(all(feature = "hardware", target_os = "linux")))]
    let sensor = {
        tracing::info!("running against simulated presence sensor");
        kinsense_hardware::SimulatedPresence::new(SIM_LEAD_POLLS, SIM_ACTIVE_POLLS)
    };

    runner::run_motion(
        sensor,
        MonotonicClock::new(),
        cancel_check(shutdown),
        params,
        on_report,
    )
}

pub fn run_pendulum(
    cfg: &kinsense_config::Config,
    ov: PendulumOverrides,
    shutdown: &Arc<AtomicBool>,
) -> CoreResult<()> {
    let mut params = OscillationParams {
        timing: (&cfg.timing).into(),
        oscillation: (&cfg.oscillation).into(),
        mode: if ov.paced {
            SamplingMode::Paced
        } else {
            SamplingMode::Direct
        },
        max_events: ov.max_events,
    };
    if let Some(ms) = ov.sample_ms {
        params.timing.angle_sample_ms = ms;
    }
    if let Some(deg) = ov.threshold {
        params.oscillation.equilibrium_threshold_deg = deg;
    }
    if !(params.oscillation.equilibrium_threshold_deg.is_finite()
        && params.oscillation.equilibrium_threshold_deg > 0.0)
    {
        return Err(MotionError::Config("--threshold must be > 0".into()).into());
    }

    let json = json_mode();
    let on_event = move |e: &OscillationEvent| print_event(e, json);

    // No angle-sensing hardware driver exists yet; the pendulum command always
    // runs against the placeholder sinusoid.
    let clock = MonotonicClock::new();
    let sensor = kinsense_hardware::SimulatedPendulum::new(clock, SIM_AMPLITUDE_DEG, SIM_PERIOD_S);
    tracing::info!(
        amplitude_deg = SIM_AMPLITUDE_DEG,
        period_s = SIM_PERIOD_S,
        "running against simulated pendulum"
    );
    runner::track_oscillations(sensor, clock, cancel_check(shutdown), params, on_event)
}

/// Read each configured sensor once and report readiness.
pub fn self_check(cfg: &kinsense_config::Config) -> CoreResult<()> {
    use kinsense_traits::{AngleSensor, PresenceSensor};

    #[cfg(all(feature = "hardware", target_os = "linux"))]
    let mut presence = kinsense_hardware::HardwarePresence::new(cfg.pins.pir_in).map_err(|e| {
        eyre::Report::new(MotionError::HardwareFault(e.to_string()))
            .wrap_err("opening PIR input pin")
    })?;
    #[cfg(not(all(feature = "hardware", target_os = "linux")))]
    let mut presence = {
        let _ = cfg.pins.pir_in;
        kinsense_hardware::SimulatedPresence::new(SIM_LEAD_POLLS, SIM_ACTIVE_POLLS)
    };

    let active = presence
        .read()
        .map_err(|e| eyre::Report::new(MotionError::Hardware(e.to_string())))?;

    let mut pendulum = kinsense_hardware::SimulatedPendulum::new(
        MonotonicClock::new(),
        SIM_AMPLITUDE_DEG,
        SIM_PERIOD_S,
    );
    let angle_deg = pendulum
        .read()
        .map_err(|e| eyre::Report::new(MotionError::Hardware(e.to_string())))?;

    tracing::info!(active, angle_deg, "self-check reads complete");
    if json_mode() {
        println!(
            "{}",
            serde_json::json!({ "status": "ok", "presence": active, "angle_deg": angle_deg })
        );
    } else {
        println!("self-check ok");
    }
    Ok(())
}

fn print_report(r: &MotionReport, json: bool) {
    if json {
        let obj = serde_json::json!({
            "duration_s": r.duration_s,
            "avg_velocity_mps": r.kinematics.avg_velocity_mps,
            "displacement_m": r.kinematics.displacement_m,
            "avg_acceleration_mps2": r.kinematics.avg_acceleration_mps2,
        });
        println!("{obj}");
    } else {
        println!("Time Interval: {:.2} s", r.duration_s);
        println!("Average Velocity: {:.2} m/s", r.kinematics.avg_velocity_mps);
        println!("Displacement: {:.2} m", r.kinematics.displacement_m);
        println!(
            "Average Acceleration: {:.2} m/s²",
            r.kinematics.avg_acceleration_mps2
        );
    }
}

fn print_event(e: &OscillationEvent, json: bool) {
    if json {
        let obj = serde_json::json!({
            "period_s": e.period_s,
            "amplitude_deg": e.amplitude_deg,
        });
        println!("{obj}");
    } else {
        println!(
            "Period: {:.2} s | Amplitude: {:.2}°",
            e.period_s, e.amplitude_deg
        );
    }
}
