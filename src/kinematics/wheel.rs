//! Wheel identities and per-wheel power sets.

use core::str::FromStr;

use crate::error::ConfigError;

/// The four wheel identities of a mecanum chassis.
///
/// A closed enumeration: every wheel has exactly one direction line, one
/// enable line, and one output channel, and the mapping is fixed at build
/// time. Diagnostic surfaces that select a wheel by name go through
/// [`Wheel::from_name`], which rejects unknown spellings instead of silently
/// ignoring them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wheel {
    /// Front left wheel.
    FrontLeft,
    /// Front right wheel.
    FrontRight,
    /// Rear left wheel.
    RearLeft,
    /// Rear right wheel.
    RearRight,
}

impl Wheel {
    /// All four wheels in actuation order.
    pub const ALL: [Wheel; 4] = [
        Wheel::FrontLeft,
        Wheel::FrontRight,
        Wheel::RearLeft,
        Wheel::RearRight,
    ];

    /// Index of this wheel in actuation order.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Wheel::FrontLeft => 0,
            Wheel::FrontRight => 1,
            Wheel::RearLeft => 2,
            Wheel::RearRight => 3,
        }
    }

    /// Canonical name, matching the configuration spelling.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Wheel::FrontLeft => "front_left",
            Wheel::FrontRight => "front_right",
            Wheel::RearLeft => "rear_left",
            Wheel::RearRight => "rear_right",
        }
    }

    /// Parse a wheel from its canonical name.
    ///
    /// Returns `None` for anything other than the four known spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "front_left" => Some(Wheel::FrontLeft),
            "front_right" => Some(Wheel::FrontRight),
            "rear_left" => Some(Wheel::RearLeft),
            "rear_right" => Some(Wheel::RearRight),
            _ => None,
        }
    }
}

impl FromStr for Wheel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Wheel::from_name(s).ok_or_else(|| {
            ConfigError::UnknownWheel(heapless::String::try_from(s).unwrap_or_default())
        })
    }
}

/// Commanded power for all four wheels.
///
/// Each element is a signed speed fraction; after
/// [`normalized`](WheelPowers::normalized) every element lies in [-1, 1].
/// Positive power turns the wheel in its forward rotational sense.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelPowers([f32; 4]);

impl WheelPowers {
    /// Create from per-wheel values in actuation order (FL, FR, RL, RR).
    #[inline]
    pub const fn new(front_left: f32, front_right: f32, rear_left: f32, rear_right: f32) -> Self {
        Self([front_left, front_right, rear_left, rear_right])
    }

    /// All wheels stopped.
    pub const ZERO: Self = Self([0.0; 4]);

    /// Get the power for one wheel.
    #[inline]
    pub fn get(&self, wheel: Wheel) -> f32 {
        self.0[wheel.index()]
    }

    /// Set the power for one wheel.
    #[inline]
    pub fn set(&mut self, wheel: Wheel, power: f32) {
        self.0[wheel.index()] = power;
    }

    /// Largest absolute wheel power.
    pub fn max_magnitude(&self) -> f32 {
        let mut max = 0.0f32;
        for &p in &self.0 {
            let m = libm::fabsf(p);
            if m > max {
                max = m;
            }
        }
        max
    }

    /// Rescale all four powers back into [-1, 1], preserving their ratios.
    ///
    /// If the largest magnitude exceeds 1, every power is divided by it;
    /// otherwise the set is returned unchanged. Values are never scaled up.
    /// Independent per-wheel clamping would distort the commanded motion
    /// vector; this is the exact linear projection back onto the unit
    /// hypercube boundary along the ray through the raw vector.
    pub fn normalized(self) -> Self {
        let max = self.max_magnitude();
        if max > 1.0 {
            Self(self.0.map(|p| p / max))
        } else {
            self
        }
    }

    /// The four powers in actuation order (FL, FR, RL, RR).
    #[inline]
    pub const fn as_array(&self) -> [f32; 4] {
        self.0
    }
}
