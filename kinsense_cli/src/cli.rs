//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "kinsense", version, about = "Motion kinematics sensing CLI")]
pub struct Cli {
    /// Path to config TOML (typed)
    #[arg(long, value_name = "FILE", default_value = "etc/kinsense_config.toml")]
    pub config: PathBuf,

    /// Emit results and errors as JSON instead of plain text
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measure linear pass-through motion and report inferred kinematics
    Motion {
        /// Number of measurement cycles; 0 runs until Ctrl-C
        #[arg(long, default_value_t = 1)]
        cycles: u32,
        /// Override detection zone width in meters (takes precedence over config)
        #[arg(long, value_name = "METERS", allow_negative_numbers = true)]
        zone_width: Option<f64>,
        /// Override synthesized profile node count (>= 2)
        #[arg(long, value_name = "N")]
        samples: Option<usize>,
        /// Override presence polling cadence in ms
        #[arg(long, value_name = "MS")]
        poll_ms: Option<u64>,
    },
    /// Track pendulum half-oscillations and report period/amplitude pairs
    Pendulum {
        /// Stop after this many events; 0 runs until Ctrl-C
        #[arg(long, default_value_t = 0)]
        max_events: u32,
        /// Override equilibrium band threshold in degrees
        #[arg(long, value_name = "DEG")]
        threshold: Option<f64>,
        /// Override angle sampling cadence in ms
        #[arg(long, value_name = "MS")]
        sample_ms: Option<u64>,
        /// Sample on a rate-paced background thread instead of inline reads
        #[arg(long, action = ArgAction::SetTrue)]
        paced: bool,
    },
    /// Quick health check (hardware presence / sim ok)
    SelfCheck,
}
