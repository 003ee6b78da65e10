//! Drive-level configuration from TOML.

use serde::Deserialize;

use super::units::Rpm;

/// Drive-level configuration: RPM scale and output device resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct DriveConfig {
    /// Maximum RPM for the diagnostic direct-motor path.
    #[serde(default = "default_max_rpm")]
    pub max_rpm: Rpm,

    /// Maximum output code accepted by a channel (device resolution ceiling,
    /// e.g. 4095 for a 12-bit channel).
    #[serde(default = "default_full_scale")]
    pub full_scale: u16,
}

fn default_max_rpm() -> Rpm {
    Rpm(75.0)
}

fn default_full_scale() -> u16 {
    4095
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            max_rpm: default_max_rpm(),
            full_scale: default_full_scale(),
        }
    }
}
