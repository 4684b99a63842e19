//! `From` implementations bridging `kinsense_config` types to
//! `kinsense_core` types.
//!
//! These eliminate manual field-by-field mapping in the CLI.

use crate::config::{OscillationCfg, ProfileCfg, TimingCfg};

// ── TimingCfg ────────────────────────────────────────────────────────────────

impl From<&kinsense_config::Timing> for TimingCfg {
    fn from(c: &kinsense_config::Timing) -> Self {
        Self {
            presence_poll_ms: c.presence_poll_ms,
            angle_sample_ms: c.angle_sample_ms,
        }
    }
}

// ── ProfileCfg ───────────────────────────────────────────────────────────────

impl From<&kinsense_config::Profile> for ProfileCfg {
    fn from(c: &kinsense_config::Profile) -> Self {
        Self {
            num_samples: c.num_samples,
            zone_width_m: c.zone_width_m,
        }
    }
}

// ── OscillationCfg ───────────────────────────────────────────────────────────

impl From<&kinsense_config::Oscillation> for OscillationCfg {
    fn from(c: &kinsense_config::Oscillation) -> Self {
        Self {
            equilibrium_threshold_deg: c.equilibrium_threshold_deg,
        }
    }
}
