#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the kinematics sensing pipelines.
//!
//! `Config` and sub-structs are deserialized from TOML and validated.
//! Every section has defaults so the CLI can run against a missing or
//! partial file; `validate()` rejects values the core cannot work with.
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Pins {
    /// GPIO input wired to the PIR presence sensor (BCM numbering).
    pub pir_in: u8,
}

impl Default for Pins {
    fn default() -> Self {
        Self { pir_in: 14 }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Presence polling cadence in milliseconds (fixed, not adaptive).
    pub presence_poll_ms: u64,
    /// Angle sampling cadence in milliseconds.
    pub angle_sample_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            presence_poll_ms: 100,
            angle_sample_ms: 50,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Node count of the synthesized velocity profile. Must be >= 2;
    /// odd counts let Simpson's rule cover the whole series.
    pub num_samples: usize,
    /// Detection zone width in meters; the profile is normalized so its
    /// time integral equals this displacement.
    pub zone_width_m: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            num_samples: 11,
            zone_width_m: 1.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Oscillation {
    /// Angular band (degrees) around zero within which a direction reversal
    /// counts as an equilibrium crossing.
    pub equilibrium_threshold_deg: f64,
}

impl Default for Oscillation {
    fn default() -> Self {
        Self {
            equilibrium_threshold_deg: 5.0,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub pins: Pins,
    pub timing: Timing,
    pub profile: Profile,
    pub oscillation: Oscillation,
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Timing
        if self.timing.presence_poll_ms == 0 {
            eyre::bail!("timing.presence_poll_ms must be >= 1");
        }
        if self.timing.presence_poll_ms > 10_000 {
            eyre::bail!("timing.presence_poll_ms is unreasonably large (>10s)");
        }
        if self.timing.angle_sample_ms == 0 {
            eyre::bail!("timing.angle_sample_ms must be >= 1");
        }
        if self.timing.angle_sample_ms > 10_000 {
            eyre::bail!("timing.angle_sample_ms is unreasonably large (>10s)");
        }

        // Profile
        if self.profile.num_samples < 2 {
            eyre::bail!("profile.num_samples must be >= 2");
        }
        if !(self.profile.zone_width_m.is_finite() && self.profile.zone_width_m > 0.0) {
            eyre::bail!("profile.zone_width_m must be > 0");
        }

        // Oscillation
        if !(self.oscillation.equilibrium_threshold_deg.is_finite()
            && self.oscillation.equilibrium_threshold_deg > 0.0)
        {
            eyre::bail!("oscillation.equilibrium_threshold_deg must be > 0");
        }

        // Logging
        if let Some(rot) = self.logging.rotation.as_deref()
            && !matches!(rot, "never" | "daily" | "hourly")
        {
            eyre::bail!("logging.rotation must be one of: never, daily, hourly");
        }

        Ok(())
    }
}
