//! Response shaping configuration from TOML.

use serde::Deserialize;

/// Configuration for the response shaper.
///
/// The three steps are independently toggleable and applied in a fixed
/// order: cardinal snap, then ramp, then strafe scale.
#[derive(Debug, Clone, Deserialize)]
pub struct ShapingConfig {
    /// Whether the ramp nonlinearity is applied.
    #[serde(default = "default_ramp_enabled")]
    pub ramp_enabled: bool,

    /// Ramp exponent (must be > 0; 2.0 gives quadratic fine-motion
    /// compression).
    #[serde(default = "default_ramp_exponent")]
    pub ramp_exponent: f32,

    /// Snap the translational vector to the nearest of eight directions.
    #[serde(default)]
    pub snap_to_cardinal: bool,

    /// Attenuation applied to the strafe axis after shaping (must be in
    /// (0, 1]); compensates for mecanum wheels' weaker strafing authority.
    #[serde(default = "default_strafe_scale")]
    pub strafe_scale: f32,
}

fn default_ramp_enabled() -> bool {
    true
}

fn default_ramp_exponent() -> f32 {
    2.0
}

fn default_strafe_scale() -> f32 {
    1.0
}

impl Default for ShapingConfig {
    fn default() -> Self {
        Self {
            ramp_enabled: default_ramp_enabled(),
            ramp_exponent: default_ramp_exponent(),
            snap_to_cardinal: false,
            strafe_scale: default_strafe_scale(),
        }
    }
}
