//! Analog output device abstraction.
//!
//! The motor amplifiers take an unsigned magnitude from a 4-channel analog
//! output device (e.g. an MCP4728 DAC); direction is carried on separate
//! GPIO lines owned by the drive. embedded-hal has no trait for multi-channel
//! analog output, so the seam is defined here.

use core::fmt;

use serde::Deserialize;

/// One of the four output channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Channel A.
    A,
    /// Channel B.
    B,
    /// Channel C.
    C,
    /// Channel D.
    D,
}

impl Channel {
    /// All four channels in device order.
    pub const ALL: [Channel; 4] = [Channel::A, Channel::B, Channel::C, Channel::D];

    /// Zero-based channel index on the device.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Channel::A => 0,
            Channel::B => 1,
            Channel::C => 2,
            Channel::D => 3,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::A => "A",
            Channel::B => "B",
            Channel::C => "C",
            Channel::D => "D",
        };
        write!(f, "{}", name)
    }
}

/// A 4-channel analog output device.
///
/// Implementations wrap the concrete hardware (a DAC driver, a PWM block, a
/// test double). The drive is the only writer; channel codes are unsigned
/// magnitudes in `[0, full_scale]` and carry no direction information.
pub trait AnalogOutput {
    /// Device error type.
    type Error;

    /// Bring the device online.
    ///
    /// Called exactly once, before any channel write. A failure here is
    /// fatal to the drive subsystem.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Set one channel to an output code.
    fn set_channel(&mut self, channel: Channel, code: u16) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_indices() {
        for (i, channel) in Channel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), i);
        }
    }
}
