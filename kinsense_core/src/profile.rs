//! Triangular velocity-profile synthesis.
//!
//! A presence sensor only yields a duration; to reconstruct kinematics we
//! assume constant acceleration up to the midpoint and constant deceleration
//! after, normalized so the profile integrates to the detection zone width.

use crate::types::SampleSeries;

/// Synthesize a triangular velocity profile over `[0, duration_s]`.
///
/// For sample index `i` of `n` (0-indexed), `t = duration * i / (n - 1)`;
/// `v = 4 * zone_width * t / duration^2` up to the midpoint and
/// `v = 4 * zone_width * (duration - t) / duration^2` after. This is the
/// unique triangular velocity function whose integral over the interval
/// equals `zone_width_m` with its peak at the midpoint.
///
/// `duration_s` must be positive; the motion timer rejects zero-length
/// intervals before this is reached. `num_samples` is clamped to >= 2.
pub fn synthesize_profile(duration_s: f64, num_samples: usize, zone_width_m: f64) -> SampleSeries {
    debug_assert!(duration_s > 0.0, "duration must be positive");
    let n = num_samples.max(2);

    let mut times = Vec::with_capacity(n);
    let mut velocities = Vec::with_capacity(n);
    for i in 0..n {
        let t = duration_s * (i as f64) / ((n - 1) as f64);
        let v = if t <= duration_s / 2.0 {
            4.0 * zone_width_m * t / (duration_s * duration_s)
        } else {
            4.0 * zone_width_m * (duration_s - t) / (duration_s * duration_s)
        };
        times.push(t);
        velocities.push(v);
    }
    SampleSeries { times, velocities }
}
