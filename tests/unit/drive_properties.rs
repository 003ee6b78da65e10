//! Property tests for the kinematics, shaping, and RPM invariants.

use proptest::prelude::*;

use mecanum_drive::shaping::{ramp, snap_to_cardinal};
use mecanum_drive::{mix, rpm_to_power, MotionIntent, Rpm, Wheel, WheelPowers};

proptest! {
    /// Normalization is a no-op while every wheel magnitude is within 1.
    #[test]
    fn normalization_noop_within_unit_range(
        fl in -1.0f32..=1.0,
        fr in -1.0f32..=1.0,
        rl in -1.0f32..=1.0,
        rr in -1.0f32..=1.0,
    ) {
        let powers = WheelPowers::new(fl, fr, rl, rr);
        prop_assert_eq!(powers.normalized(), powers);
    }

    /// When the raw maximum exceeds 1, normalization brings it to exactly 1
    /// and preserves every wheel's ratio to the raw vector.
    #[test]
    fn normalization_preserves_ratios(
        strafe in -1.0f32..=1.0,
        forward in -1.0f32..=1.0,
        turn in -1.0f32..=1.0,
    ) {
        let raw = mix(MotionIntent::new(strafe, forward, turn));
        let max = raw.max_magnitude();
        prop_assume!(max > 1.0);

        let normalized = raw.normalized();
        prop_assert!((normalized.max_magnitude() - 1.0).abs() < 1e-5);

        for wheel in Wheel::ALL {
            let rescaled = normalized.get(wheel) * max;
            prop_assert!(
                (rescaled - raw.get(wheel)).abs() < 1e-4,
                "ratio broken for {:?}: {} vs {}",
                wheel,
                rescaled,
                raw.get(wheel)
            );
        }
    }

    /// Ramp shaping is odd: shape(-v) == -shape(v).
    #[test]
    fn ramp_is_odd(v in 0.0f32..=1.0, exponent in 0.5f32..4.0) {
        prop_assert_eq!(ramp(-v, exponent), -ramp(v, exponent));
    }

    /// Ramp shaping never leaves the unit range for unit-range inputs.
    #[test]
    fn ramp_stays_in_unit_range(v in -1.0f32..=1.0, exponent in 0.5f32..4.0) {
        let shaped = ramp(v, exponent);
        prop_assert!(shaped.abs() <= 1.0 + 1e-6);
    }

    /// Snapping always yields one of the nine representable outputs (eight
    /// sector vectors plus zero), and zero only for the zero input.
    #[test]
    fn snap_yields_sector_vector(x in -1.0f32..=1.0, y in -1.0f32..=1.0) {
        let (sx, sy) = snap_to_cardinal(x, y);

        prop_assert!(sx == 0.0 || sx == 1.0 || sx == -1.0);
        prop_assert!(sy == 0.0 || sy == 1.0 || sy == -1.0);

        if x != 0.0 || y != 0.0 {
            prop_assert!(sx != 0.0 || sy != 0.0);
        } else {
            prop_assert_eq!((sx, sy), (0.0, 0.0));
        }
    }

    /// Snapping is deterministic: identical inputs give identical sectors.
    #[test]
    fn snap_is_deterministic(x in -1.0f32..=1.0, y in -1.0f32..=1.0) {
        prop_assert_eq!(snap_to_cardinal(x, y), snap_to_cardinal(x, y));
    }

    /// The RPM mapping is monotonic over the request range.
    #[test]
    fn rpm_power_monotonic(a in 0.0f32..=75.0, b in 0.0f32..=75.0) {
        prop_assume!(a < b);
        prop_assert!(
            rpm_to_power(Rpm(a), Rpm(75.0), true) <= rpm_to_power(Rpm(b), Rpm(75.0), true)
        );
    }

    /// Forward and reverse requests mirror each other exactly.
    #[test]
    fn rpm_power_mirrors_direction(rpm in 0.0f32..=75.0) {
        prop_assert_eq!(
            rpm_to_power(Rpm(rpm), Rpm(75.0), false),
            -rpm_to_power(Rpm(rpm), Rpm(75.0), true)
        );
    }
}
