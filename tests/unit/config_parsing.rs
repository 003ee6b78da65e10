//! Unit tests for TOML configuration parsing.

use mecanum_drive::{Channel, Rpm, SystemConfig, Wheel};

/// Test parsing a complete drive configuration from TOML.
#[test]
fn test_parse_drive_config() {
    let toml_str = r#"
[drive]
max_rpm = 60.0
full_scale = 2047
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.drive.max_rpm, Rpm(60.0));
    assert_eq!(config.drive.full_scale, 2047);
}

/// Test that omitted sections fall back to documented defaults.
#[test]
fn test_parse_defaults() {
    let config: SystemConfig = toml::from_str("").expect("Failed to parse TOML");

    assert_eq!(config.drive.max_rpm, Rpm(75.0));
    assert_eq!(config.drive.full_scale, 4095);
    assert!(config.shaping.ramp_enabled);
    assert_eq!(config.shaping.ramp_exponent, 2.0);
    assert!(!config.shaping.snap_to_cardinal);
    assert_eq!(config.shaping.strafe_scale, 1.0);
    assert_eq!(config.wheel(Wheel::FrontLeft).channel, Channel::A);
    assert_eq!(config.wheel(Wheel::RearRight).channel, Channel::D);
}

/// Test parsing shaping configuration.
#[test]
fn test_parse_shaping_config() {
    let toml_str = r#"
[shaping]
ramp_enabled = false
ramp_exponent = 1.5
snap_to_cardinal = true
strafe_scale = 0.5
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert!(!config.shaping.ramp_enabled);
    assert_eq!(config.shaping.ramp_exponent, 1.5);
    assert!(config.shaping.snap_to_cardinal);
    assert_eq!(config.shaping.strafe_scale, 0.5);
}

/// Test parsing a full wheel mapping with inverted right side.
#[test]
fn test_parse_wheel_mapping() {
    let toml_str = r#"
[wheels.front_left]
channel = "d"

[wheels.front_right]
channel = "c"
invert_direction = true

[wheels.rear_left]
channel = "b"

[wheels.rear_right]
channel = "a"
invert_direction = true
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.wheel(Wheel::FrontLeft).channel, Channel::D);
    assert_eq!(config.wheel(Wheel::FrontRight).channel, Channel::C);
    assert!(config.wheel(Wheel::FrontRight).invert_direction);
    assert!(!config.wheel(Wheel::RearLeft).invert_direction);
    assert!(config.wheel(Wheel::RearRight).invert_direction);
}

/// Test that a partial wheel table is rejected during parsing.
#[test]
fn test_missing_wheel_rejected() {
    let toml_str = r#"
[wheels.front_left]
channel = "a"
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

/// Test that an unknown channel letter is rejected during parsing.
#[test]
fn test_invalid_channel_rejected() {
    let toml_str = r#"
[wheels.front_left]
channel = "x"

[wheels.front_right]
channel = "b"

[wheels.rear_left]
channel = "c"

[wheels.rear_right]
channel = "d"
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}
