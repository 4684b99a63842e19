//! Data types flowing between the pipeline stages.

/// Ordered time/velocity samples spanning exactly `[0, duration]`, strictly
/// increasing in time. Produced by the profile synthesizer, consumed by the
/// integrator, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    pub times: Vec<f64>,
    pub velocities: Vec<f64>,
}

impl SampleSeries {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Total time span, zero for series with fewer than two points.
    pub fn span(&self) -> f64 {
        match (self.times.first(), self.times.last()) {
            (Some(first), Some(last)) if self.times.len() > 1 => last - first,
            _ => 0.0,
        }
    }
}

/// Result of integrating a velocity series. All fields are zero for
/// degenerate inputs (fewer than 3 points or zero span); that is a defined
/// result, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicResult {
    pub avg_velocity_mps: f64,
    pub displacement_m: f64,
    pub avg_acceleration_mps2: f64,
}

/// One completed linear-motion measurement cycle: the numeric contract
/// handed to any reporting layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionReport {
    pub duration_s: f64,
    pub kinematics: KinematicResult,
}

/// Emitted at each detected half-oscillation boundary. Transient; not
/// retained by the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillationEvent {
    pub period_s: f64,
    pub amplitude_deg: f64,
}
