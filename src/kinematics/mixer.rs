//! Inverse kinematics for a four-wheel mecanum chassis.

use super::{MotionIntent, WheelPowers};

/// Map a motion intent to raw per-wheel powers using the additive X-drive
/// model.
///
/// For rollers mounted at 45°: the strafe term drives a lateral component,
/// the forward term a common forward component, and the turn term a
/// differential rotational component, with the sign pattern chosen so that
/// positive turn yields clockwise rotation about the chassis center.
///
/// ```text
/// front_left  = forward + strafe + turn
/// front_right = forward - strafe - turn
/// rear_left   = forward - strafe + turn
/// rear_right  = forward + strafe - turn
/// ```
///
/// No clamping happens here; the raw magnitudes can exceed 1 and are brought
/// back into range by [`WheelPowers::normalized`].
pub fn mix(intent: MotionIntent) -> WheelPowers {
    let MotionIntent {
        strafe,
        forward,
        turn,
    } = intent;

    WheelPowers::new(
        forward + strafe + turn,
        forward - strafe - turn,
        forward - strafe + turn,
        forward + strafe - turn,
    )
}
