#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core kinematics inference (hardware-agnostic).
//!
//! This crate reconstructs motion kinematics from coarse sensor signals.
//! All hardware interactions go through the `kinsense_traits` capability
//! traits (`PresenceSensor`, `AngleSensor`, `Clock`), so everything here is
//! unit-testable with scripted sensors and a simulated clock.
//!
//! ## Architecture
//!
//! - **Timing**: blocking presence-edge measurement (`timer` module)
//! - **Synthesis**: triangular velocity-profile reconstruction (`profile`)
//! - **Integration**: composite Simpson displacement with odd/even node
//!   handling (`integrator`)
//! - **Oscillation**: threshold-debounced half-cycle detection
//!   (`oscillation`)
//! - **Orchestration**: blocking pipeline loops with cooperative
//!   cancellation (`runner`), optional background sampling (`sampler`)
//!
//! Tick arithmetic is wraparound-safe throughout: timestamps come from a
//! wrapping millisecond counter and differences use `ticks_diff`.

// Module declarations
pub mod config;
pub mod conversions;
pub mod error;
pub mod hw_error;
pub mod integrator;
pub mod mocks;
pub mod oscillation;
pub mod profile;
pub mod runner;
pub mod sampler;
pub mod timer;
pub mod types;
pub mod util;

pub use config::{OscillationCfg, ProfileCfg, TimingCfg};
pub use error::{AbortReason, MotionError};
pub use integrator::integrate;
pub use oscillation::{OscillationTracker, TrackerState};
pub use profile::synthesize_profile;
pub use runner::{MotionParams, OscillationParams, SamplingMode};
pub use timer::MotionTimer;
pub use types::{KinematicResult, MotionReport, OscillationEvent, SampleSeries};
