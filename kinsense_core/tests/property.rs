use kinsense_core::{
    OscillationCfg, OscillationTracker, SampleSeries, TrackerState, integrate, synthesize_profile,
};
use proptest::prelude::*;

// Uniform grid over [0, span] with velocity a + b*t at each node.
fn linear_series(a: f64, b: f64, span: f64, n: usize) -> SampleSeries {
    let times: Vec<f64> = (0..n)
        .map(|i| span * (i as f64) / ((n - 1) as f64))
        .collect();
    let velocities = times.iter().map(|&t| a + b * t).collect();
    SampleSeries { times, velocities }
}

proptest! {
    // Simpson and the trailing trapezoid patch are both exact on polynomials
    // of degree <= 1, for any node count and either parity.
    #[test]
    fn linear_velocity_integrates_exactly(
        a in -10.0f64..10.0,
        b in -5.0f64..5.0,
        span in 0.1f64..100.0,
        n in 3usize..200,
    ) {
        let r = integrate(&linear_series(a, b, span, n));
        let expected = a * span + b * span * span / 2.0;
        let scale = expected.abs().max(1.0);
        prop_assert!(
            (r.displacement_m - expected).abs() < 1e-9 * scale,
            "displacement {} vs closed form {}", r.displacement_m, expected
        );
        // avg velocity is displacement over span by definition
        prop_assert!((r.avg_velocity_mps - r.displacement_m / span).abs() < 1e-9 * scale);
        // endpoints are a and a + b*span
        let expected_acc = b;
        prop_assert!((r.avg_acceleration_mps2 - expected_acc).abs() < 1e-9 * scale.max(b.abs()));
    }

    // The synthesized triangular profile always starts and ends at rest,
    // peaks at 2*zone/duration, and integrates back to roughly the zone
    // width regardless of parameters.
    #[test]
    fn profile_shape_invariants_hold(
        duration_s in 0.05f64..60.0,
        n in 2usize..300,
        zone in 0.01f64..50.0,
    ) {
        let series = synthesize_profile(duration_s, n, zone);
        prop_assert!(series.len() >= 2);
        prop_assert!(series.velocities[0].abs() < 1e-12);
        prop_assert!(series.velocities[series.len() - 1].abs() < 1e-9 * zone.max(1.0));

        let peak = 2.0 * zone / duration_s;
        for &v in &series.velocities {
            prop_assert!(v >= -1e-12, "velocity {v} must be nonnegative");
            prop_assert!(v <= peak + 1e-9 * peak, "velocity {v} above peak {peak}");
        }

        // times are strictly increasing and span exactly the duration
        for w in series.times.windows(2) {
            prop_assert!(w[1] > w[0]);
        }
        prop_assert!((series.span() - duration_s).abs() < 1e-9 * duration_s.max(1.0));

        if series.len() >= 5 {
            let r = integrate(&series);
            // discretization error at the kink shrinks with n; 25% covers
            // even the coarsest grids this strategy produces
            prop_assert!(
                (r.displacement_m - zone).abs() < 0.25 * zone,
                "displacement {} too far from zone {}", r.displacement_m, zone
            );
        }
    }

    // The tracker never panics on arbitrary waveforms, its running amplitude
    // never decreases between events, and every emitted event carries a
    // nonnegative period and an amplitude no larger than the largest
    // magnitude seen so far.
    #[test]
    fn tracker_state_machine_is_total(
        angles in prop::collection::vec(-90.0f64..90.0, 1..300),
        step_ms in 1u32..500,
    ) {
        let tracker = OscillationTracker::new(&OscillationCfg::default());
        let mut state = TrackerState::default();
        let mut running_max = 0.0f64;
        let mut prev_amp = 0.0f64;

        for (i, angle) in angles.into_iter().enumerate() {
            running_max = running_max.max(angle.abs());
            let (next, event) = tracker.update(state, angle, (i as u32) * step_ms);
            if let Some(e) = event {
                prop_assert!(e.period_s >= 0.0);
                prop_assert!(e.amplitude_deg <= running_max + 1e-12);
                // amplitude resets after each event
                prop_assert!(next.max_amplitude_deg <= e.amplitude_deg.max(angle.abs()));
                running_max = angle.abs();
                prev_amp = 0.0;
            } else {
                prop_assert!(next.max_amplitude_deg >= prev_amp);
                prev_amp = next.max_amplitude_deg;
            }
            state = next;
        }
    }
}
