//! Runtime configuration types for the sensing pipelines.
//!
//! These are the structs consumed by the core; they are separate from the
//! TOML-deserialized schema in `kinsense_config` (bridged in `conversions`).

/// Polling/sampling cadences. Both are fixed configuration constants, not
/// adaptive to the signal.
#[derive(Debug, Clone)]
pub struct TimingCfg {
    /// Presence polling cadence in milliseconds.
    pub presence_poll_ms: u64,
    /// Angle sampling cadence in milliseconds.
    pub angle_sample_ms: u64,
}

impl Default for TimingCfg {
    fn default() -> Self {
        Self {
            presence_poll_ms: 100,
            angle_sample_ms: 50,
        }
    }
}

/// Velocity-profile synthesis parameters.
#[derive(Debug, Clone)]
pub struct ProfileCfg {
    /// Node count of the synthesized series (>= 2). Odd counts let the
    /// composite Simpson rule cover the whole series without a trapezoid
    /// patch.
    pub num_samples: usize,
    /// Detection zone width in meters; the synthesized profile integrates
    /// to exactly this displacement.
    pub zone_width_m: f64,
}

impl Default for ProfileCfg {
    fn default() -> Self {
        Self {
            num_samples: 11,
            zone_width_m: 1.0,
        }
    }
}

/// Oscillation tracker parameters.
#[derive(Debug, Clone)]
pub struct OscillationCfg {
    /// Angular band (degrees) around zero within which a direction reversal
    /// counts as an equilibrium crossing. The debounce band.
    pub equilibrium_threshold_deg: f64,
}

impl Default for OscillationCfg {
    fn default() -> Self {
        Self {
            equilibrium_threshold_deg: 5.0,
        }
    }
}
