//! RPM-to-power translation for the diagnostic direct-motor path.

use crate::config::units::Rpm;

/// Convert a requested RPM into the [-1, 1] power domain.
///
/// The request is clamped to `[0, max_rpm]`, scaled linearly to `[0, 1]`, and
/// signed by the `forward` flag: `rpm_to_power(0, max) == 0` and
/// `rpm_to_power(max, max) == ±1`. The mapping is monotonic in `rpm`.
///
/// A non-positive `max_rpm` yields zero power; an unusable scale never
/// commands motion.
pub fn rpm_to_power(rpm: Rpm, max_rpm: Rpm, forward: bool) -> f32 {
    if max_rpm.value() <= 0.0 {
        return 0.0;
    }

    let clamped = rpm.value().clamp(0.0, max_rpm.value());
    let power = clamped / max_rpm.value();

    if forward {
        power
    } else {
        -power
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_saturation_points() {
        assert_eq!(rpm_to_power(Rpm(0.0), Rpm(75.0), true), 0.0);
        assert_eq!(rpm_to_power(Rpm(75.0), Rpm(75.0), true), 1.0);
        assert_eq!(rpm_to_power(Rpm(75.0), Rpm(75.0), false), -1.0);
    }

    #[test]
    fn test_linear_midpoint() {
        assert!((rpm_to_power(Rpm(37.5), Rpm(75.0), true) - 0.5).abs() < 1e-6);
        assert!((rpm_to_power(Rpm(37.5), Rpm(75.0), false) - (-0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_rpm_clamped() {
        assert_eq!(rpm_to_power(Rpm(120.0), Rpm(75.0), true), 1.0);
        assert_eq!(rpm_to_power(Rpm(-10.0), Rpm(75.0), true), 0.0);
    }

    #[test]
    fn test_monotonic() {
        let mut last = 0.0;
        for rpm in 1..=75 {
            let power = rpm_to_power(Rpm(rpm as f32), Rpm(75.0), true);
            assert!(power > last, "power not increasing at rpm {}", rpm);
            last = power;
        }
    }

    #[test]
    fn test_invalid_scale_commands_no_motion() {
        assert_eq!(rpm_to_power(Rpm(50.0), Rpm(0.0), true), 0.0);
        assert_eq!(rpm_to_power(Rpm(50.0), Rpm(-5.0), false), 0.0);
    }
}
