use kinsense_config::load_toml;
use rstest::rstest;

#[test]
fn defaults_are_valid() {
    let cfg = load_toml("").expect("parse empty TOML");
    cfg.validate().expect("defaults should validate");
    assert_eq!(cfg.timing.presence_poll_ms, 100);
    assert_eq!(cfg.timing.angle_sample_ms, 50);
    assert_eq!(cfg.profile.num_samples, 11);
    assert!((cfg.profile.zone_width_m - 1.0).abs() < f64::EPSILON);
    assert!((cfg.oscillation.equilibrium_threshold_deg - 5.0).abs() < f64::EPSILON);
}

#[test]
fn rejects_zero_presence_poll() {
    let toml = r#"
[timing]
presence_poll_ms = 0
angle_sample_ms = 50
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject presence_poll_ms=0");
    assert!(
        format!("{err}")
            .to_lowercase()
            .contains("presence_poll_ms must be >= 1")
    );
}

#[rstest]
#[case("[profile]\nnum_samples = 1\n", "num_samples must be >= 2")]
#[case("[profile]\nzone_width_m = 0.0\n", "zone_width_m must be > 0")]
#[case("[profile]\nzone_width_m = -2.5\n", "zone_width_m must be > 0")]
#[case(
    "[oscillation]\nequilibrium_threshold_deg = 0.0\n",
    "equilibrium_threshold_deg must be > 0"
)]
#[case("[timing]\nangle_sample_ms = 0\n", "angle_sample_ms must be >= 1")]
#[case("[timing]\npresence_poll_ms = 60000\n", "unreasonably large")]
#[case("[logging]\nrotation = \"weekly\"\n", "rotation must be one of")]
fn rejects_out_of_range_values(#[case] toml: &str, #[case] needle: &str) {
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject");
    assert!(
        format!("{err}").contains(needle),
        "error {err} should mention {needle}"
    );
}

#[test]
fn accepts_full_config() {
    let toml = r#"
[pins]
pir_in = 14

[timing]
presence_poll_ms = 100
angle_sample_ms = 50

[profile]
num_samples = 11
zone_width_m = 1.0

[oscillation]
equilibrium_threshold_deg = 5.0

[logging]
level = "debug"
rotation = "daily"
"#;
    let cfg = load_toml(toml).expect("parse TOML");
    cfg.validate().expect("full config should validate");
    assert_eq!(cfg.pins.pir_in, 14);
    assert_eq!(cfg.logging.level.as_deref(), Some("debug"));
}
