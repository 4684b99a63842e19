//! Displacement and averages from a velocity series.
//!
//! Displacement uses the composite Simpson rule. Simpson requires an odd
//! node count (an even number of equal sub-intervals), so the even case is
//! handled as two explicit paths: Simpson over the first `n - 1` points plus
//! a trapezoidal patch over the trailing interval. The parity branch is a
//! numerical-methods requirement, not an implementation artifact; keep both
//! paths visible.

use crate::types::{KinematicResult, SampleSeries};

/// Integrate a velocity series into displacement and averages.
///
/// Degenerate inputs (fewer than 3 points, or zero/negative time span)
/// return an all-zero result. Accuracy is bounded by sample density; no
/// refinement or error estimation is performed.
pub fn integrate(series: &SampleSeries) -> KinematicResult {
    let n = series.len();
    if n < 3 || series.velocities.len() < 3 {
        return KinematicResult::default();
    }
    let t = &series.times;
    let v = &series.velocities;
    let span = t[n - 1] - t[0];
    if span <= 0.0 {
        return KinematicResult::default();
    }

    let displacement_m = if n % 2 == 1 {
        // Odd node count: Simpson covers the whole series.
        simpson_uniform(&t[..n], &v[..n])
    } else {
        // Even node count: Simpson over the first n-1 nodes, then patch the
        // trailing interval with the trapezoidal rule.
        let simpson_part = simpson_uniform(&t[..n - 1], &v[..n - 1]);
        let h_last = t[n - 1] - t[n - 2];
        let trapezoid_part = (v[n - 2] + v[n - 1]) * h_last / 2.0;
        simpson_part + trapezoid_part
    };

    KinematicResult {
        avg_velocity_mps: displacement_m / span,
        displacement_m,
        avg_acceleration_mps2: (v[n - 1] - v[0]) / span,
    }
}

/// Composite Simpson rule over an odd-length slice with uniform step
/// `h = span / (len - 1)`:
/// `(h/3) * (v[0] + v[last] + 4*sum(v[odd]) + 2*sum(v[even interior]))`.
fn simpson_uniform(t: &[f64], v: &[f64]) -> f64 {
    let n = t.len();
    debug_assert!(n >= 3 && n % 2 == 1, "simpson needs an odd node count");
    let h = (t[n - 1] - t[0]) / ((n - 1) as f64);
    let mut sum = v[0] + v[n - 1];
    for (i, &vi) in v.iter().enumerate().take(n - 1).skip(1) {
        let coef = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += coef * vi;
    }
    (h / 3.0) * sum
}
