//! System configuration - root configuration structure.

use serde::Deserialize;

use super::drive::DriveConfig;
use super::shaping::ShapingConfig;
use super::wheels::{WheelConfig, WheelsConfig};
use crate::kinematics::Wheel;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// Drive-level settings.
    #[serde(default)]
    pub drive: DriveConfig,

    /// Response shaping settings.
    #[serde(default)]
    pub shaping: ShapingConfig,

    /// Wheel-to-channel mapping.
    #[serde(default)]
    pub wheels: WheelsConfig,
}

impl SystemConfig {
    /// Get one wheel's mapping.
    pub fn wheel(&self, wheel: Wheel) -> &WheelConfig {
        self.wheels.get(wheel)
    }
}
