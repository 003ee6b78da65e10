//! Response shaping applied to raw motion intent before kinematics.
//!
//! Three independently toggleable steps, applied in order:
//!
//! 1. **Cardinal snap** — discretize the translational vector to the nearest
//!    of eight directions (operates on the raw magnitude-bearing vector,
//!    before ramp distorts it).
//! 2. **Ramp** — sign-preserving nonlinearity that compresses fine-motion
//!    sensitivity near zero.
//! 3. **Strafe scale** — attenuate the strafe axis to compensate for mecanum
//!    wheels' weaker lateral authority.

mod ramp;
mod snap;

pub use ramp::ramp;
pub use snap::snap_to_cardinal;

use crate::config::ShapingConfig;
use crate::kinematics::MotionIntent;

/// Shapes raw axis values in [-1, 1] into shaped axis values in [-1, 1].
#[derive(Debug, Clone, Copy)]
pub struct InputShaper {
    snap_to_cardinal: bool,
    ramp_enabled: bool,
    ramp_exponent: f32,
    strafe_scale: f32,
}

impl InputShaper {
    /// Create a shaper from configuration.
    pub fn from_config(config: &ShapingConfig) -> Self {
        Self {
            snap_to_cardinal: config.snap_to_cardinal,
            ramp_enabled: config.ramp_enabled,
            ramp_exponent: config.ramp_exponent,
            strafe_scale: config.strafe_scale,
        }
    }

    /// Apply the configured shaping steps to an intent.
    pub fn shape(&self, intent: MotionIntent) -> MotionIntent {
        let mut strafe = intent.strafe;
        let mut forward = intent.forward;
        let mut turn = intent.turn;

        if self.snap_to_cardinal {
            (strafe, forward) = snap_to_cardinal(strafe, forward);
        }

        if self.ramp_enabled {
            strafe = ramp(strafe, self.ramp_exponent);
            forward = ramp(forward, self.ramp_exponent);
            turn = ramp(turn, self.ramp_exponent);
        }

        strafe *= self.strafe_scale;

        MotionIntent::new(strafe, forward, turn)
    }
}

impl Default for InputShaper {
    fn default() -> Self {
        Self::from_config(&ShapingConfig::default())
    }
}
