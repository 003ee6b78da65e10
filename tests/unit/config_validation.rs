//! Unit tests for configuration validation.

use mecanum_drive::{validate_config, Channel, Rpm, SystemConfig};

fn parse(toml_str: &str) -> SystemConfig {
    toml::from_str(toml_str).expect("Failed to parse TOML")
}

#[test]
fn test_default_config_validates() {
    assert!(validate_config(&SystemConfig::default()).is_ok());
}

#[test]
fn test_duplicate_channels_rejected() {
    let config = parse(
        r#"
[wheels.front_left]
channel = "a"

[wheels.front_right]
channel = "b"

[wheels.rear_left]
channel = "b"

[wheels.rear_right]
channel = "d"
"#,
    );

    let err = validate_config(&config).unwrap_err();
    let err_str = format!("{}", err);
    assert!(
        err_str.contains("Channel B"),
        "Error should name the duplicated channel: {}",
        err_str
    );
}

#[test]
fn test_non_positive_max_rpm_rejected() {
    let mut config = SystemConfig::default();
    config.drive.max_rpm = Rpm(-1.0);
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_zero_full_scale_rejected() {
    let mut config = SystemConfig::default();
    config.drive.full_scale = 0;
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_ramp_exponent_must_be_positive() {
    let mut config = SystemConfig::default();
    config.shaping.ramp_exponent = 0.0;
    assert!(validate_config(&config).is_err());

    config.shaping.ramp_exponent = 2.0;
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_strafe_scale_range() {
    let mut config = SystemConfig::default();

    for invalid in [0.0, -0.5, 1.01, 2.0] {
        config.shaping.strafe_scale = invalid;
        assert!(
            validate_config(&config).is_err(),
            "strafe scale {} should be rejected",
            invalid
        );
    }

    for valid in [0.1, 0.5, 1.0] {
        config.shaping.strafe_scale = valid;
        assert!(
            validate_config(&config).is_ok(),
            "strafe scale {} should be accepted",
            valid
        );
    }
}

#[test]
fn test_permuted_channels_accepted() {
    let config = parse(
        r#"
[wheels.front_left]
channel = "d"

[wheels.front_right]
channel = "a"

[wheels.rear_left]
channel = "b"

[wheels.rear_right]
channel = "c"
"#,
    );

    assert!(validate_config(&config).is_ok());
    assert_eq!(
        config.wheel(mecanum_drive::Wheel::FrontRight).channel,
        Channel::A
    );
}
