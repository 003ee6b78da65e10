//! Ramp (nonlinearity) shaping for joystick axes.

use libm::{fabsf, powf};

/// Apply sign-preserving power-curve shaping to one axis value.
///
/// `shape(v) = sign(v) * |v|^exponent`. Compresses sensitivity near zero and
/// reaches ±1 only at ±1 input. Exact zero maps to exact zero.
pub fn ramp(input: f32, exponent: f32) -> f32 {
    if input == 0.0 {
        return 0.0;
    }

    let magnitude = powf(fabsf(input), exponent);
    if input < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}
