//! Numerical behavior of the Simpson/trapezoid integrator, including the
//! even/odd node-count paths and the profile round trip.

use kinsense_core::{KinematicResult, SampleSeries, integrate, synthesize_profile};
use rstest::rstest;

fn uniform_constant(v: f64, span: f64, n: usize) -> SampleSeries {
    let times: Vec<f64> = (0..n)
        .map(|i| span * (i as f64) / ((n - 1) as f64))
        .collect();
    let velocities = vec![v; n];
    SampleSeries { times, velocities }
}

#[rstest]
#[case(3)]
#[case(5)]
#[case(11)]
#[case(41)]
fn constant_velocity_displacement_is_exact_odd(#[case] n: usize) {
    let r = integrate(&uniform_constant(2.0, 5.0, n));
    assert!((r.displacement_m - 10.0).abs() < 1e-9);
    assert!((r.avg_velocity_mps - 2.0).abs() < 1e-9);
    assert!(r.avg_acceleration_mps2.abs() < 1e-12);
}

#[rstest]
#[case(4)]
#[case(10)]
#[case(40)]
fn constant_velocity_displacement_is_exact_even(#[case] n: usize) {
    // The trapezoid patch on the trailing interval is exact for constants.
    let r = integrate(&uniform_constant(2.0, 5.0, n));
    assert!((r.displacement_m - 10.0).abs() < 1e-9);
}

#[test]
fn synthesized_profile_integrates_to_zone_width() {
    let series = synthesize_profile(2.0, 11, 1.0);
    let r = integrate(&series);
    // The even-interval Simpson estimate of the triangular profile carries a
    // small discretization error at the kink; the contract is "approximately
    // the configured zone width".
    assert!((r.displacement_m - 1.0).abs() < 0.02);
    assert!((r.avg_velocity_mps - 0.5).abs() < 0.01);
    // Symmetric profile: start and end velocities are both zero.
    assert!(r.avg_acceleration_mps2.abs() < 1e-12);
}

#[test]
fn even_and_odd_sampling_agree_on_the_same_profile() {
    let even = integrate(&synthesize_profile(2.0, 10, 1.0));
    let odd = integrate(&synthesize_profile(2.0, 11, 1.0));
    assert!((even.displacement_m - 1.0).abs() < 0.02);
    assert!((odd.displacement_m - 1.0).abs() < 0.02);
    assert!((even.displacement_m - odd.displacement_m).abs() < 0.05);
}

#[rstest]
#[case(SampleSeries { times: vec![], velocities: vec![] })]
#[case(SampleSeries { times: vec![0.0], velocities: vec![1.0] })]
#[case(SampleSeries { times: vec![0.0, 1.0], velocities: vec![1.0, 1.0] })]
#[case(SampleSeries { times: vec![2.0, 2.0, 2.0], velocities: vec![1.0, 1.0, 1.0] })]
fn degenerate_series_return_exactly_zero(#[case] series: SampleSeries) {
    assert_eq!(integrate(&series), KinematicResult::default());
}

#[test]
fn denser_sampling_reduces_discretization_error() {
    let coarse = integrate(&synthesize_profile(2.0, 11, 1.0));
    let fine = integrate(&synthesize_profile(2.0, 101, 1.0));
    let coarse_err = (coarse.displacement_m - 1.0).abs();
    let fine_err = (fine.displacement_m - 1.0).abs();
    assert!(fine_err < coarse_err);
}
