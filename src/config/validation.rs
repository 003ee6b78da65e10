//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::kinematics::Wheel;

use super::{DriveConfig, ShapingConfig, SystemConfig, WheelsConfig};

/// Validate a system configuration.
///
/// Checks:
/// - RPM scale and full-scale code are positive
/// - Ramp exponent is positive, strafe scale lies in (0, 1]
/// - The four wheels are mapped to four distinct channels
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_drive(&config.drive)?;
    validate_shaping(&config.shaping)?;
    validate_wheels(&config.wheels)?;
    Ok(())
}

/// Validate drive-level settings.
pub fn validate_drive(config: &DriveConfig) -> Result<()> {
    if config.max_rpm.value() <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidMaxRpm(
            config.max_rpm.value(),
        )));
    }

    if config.full_scale == 0 {
        return Err(Error::Config(ConfigError::InvalidFullScale(
            config.full_scale,
        )));
    }

    Ok(())
}

/// Validate response shaping settings.
pub fn validate_shaping(config: &ShapingConfig) -> Result<()> {
    if config.ramp_exponent <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidRampExponent(
            config.ramp_exponent,
        )));
    }

    if config.strafe_scale <= 0.0 || config.strafe_scale > 1.0 {
        return Err(Error::Config(ConfigError::InvalidStrafeScale(
            config.strafe_scale,
        )));
    }

    Ok(())
}

/// Validate the wheel-to-channel mapping.
pub fn validate_wheels(config: &WheelsConfig) -> Result<()> {
    for (i, first) in Wheel::ALL.iter().enumerate() {
        for second in &Wheel::ALL[i + 1..] {
            let channel = config.get(*first).channel;
            if channel == config.get(*second).channel {
                return Err(Error::Config(ConfigError::DuplicateChannel(channel)));
            }
        }
    }

    Ok(())
}
