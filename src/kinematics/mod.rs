//! Drive kinematics: motion intent, wheel identities, and the inverse
//! kinematics mapping from intent to per-wheel power.

mod intent;
mod mixer;
mod wheel;

pub use intent::MotionIntent;
pub use mixer::mix;
pub use wheel::{Wheel, WheelPowers};
