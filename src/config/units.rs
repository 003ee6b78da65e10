//! Unit types for physical quantities.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Rotational speed in revolutions per minute.
///
/// Used by the diagnostic direct-motor path; the drive's configured maximum
/// RPM defines the scale mapping requests into the [-1, 1] power domain.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Rpm(pub f32);

impl Rpm {
    /// Create a new Rpm value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Add for Rpm {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Rpm {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Rpm.
    fn rpm(self) -> Rpm;
}

impl UnitExt for f32 {
    #[inline]
    fn rpm(self) -> Rpm {
        Rpm(self)
    }
}
