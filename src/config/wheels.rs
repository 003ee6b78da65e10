//! Wheel-to-channel mapping from TOML.

use serde::Deserialize;

use crate::drive::Channel;
use crate::kinematics::Wheel;

/// One wheel's actuation mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct WheelConfig {
    /// Output channel on the analog device.
    pub channel: Channel,

    /// Invert direction pin logic (mirrored side of the chassis).
    #[serde(default)]
    pub invert_direction: bool,
}

impl WheelConfig {
    fn new(channel: Channel) -> Self {
        Self {
            channel,
            invert_direction: false,
        }
    }
}

/// The complete wheel mapping: all four wheels, no more, no fewer.
///
/// A fixed four-field struct rather than a name-keyed table, so a
/// configuration naming an unknown wheel or leaving one out fails at parse
/// time, never at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct WheelsConfig {
    /// Front left wheel mapping.
    pub front_left: WheelConfig,
    /// Front right wheel mapping.
    pub front_right: WheelConfig,
    /// Rear left wheel mapping.
    pub rear_left: WheelConfig,
    /// Rear right wheel mapping.
    pub rear_right: WheelConfig,
}

impl WheelsConfig {
    /// Get the mapping for one wheel.
    pub fn get(&self, wheel: Wheel) -> &WheelConfig {
        match wheel {
            Wheel::FrontLeft => &self.front_left,
            Wheel::FrontRight => &self.front_right,
            Wheel::RearLeft => &self.rear_left,
            Wheel::RearRight => &self.rear_right,
        }
    }

    /// Get the mapping for one wheel, mutably.
    pub fn get_mut(&mut self, wheel: Wheel) -> &mut WheelConfig {
        match wheel {
            Wheel::FrontLeft => &mut self.front_left,
            Wheel::FrontRight => &mut self.front_right,
            Wheel::RearLeft => &mut self.rear_left,
            Wheel::RearRight => &mut self.rear_right,
        }
    }
}

impl Default for WheelsConfig {
    /// Channels A-D in actuation order, no inversion.
    fn default() -> Self {
        Self {
            front_left: WheelConfig::new(Channel::A),
            front_right: WheelConfig::new(Channel::B),
            rear_left: WheelConfig::new(Channel::C),
            rear_right: WheelConfig::new(Channel::D),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_channel_order() {
        let config = WheelsConfig::default();
        for (wheel, channel) in Wheel::ALL.into_iter().zip(Channel::ALL) {
            assert_eq!(config.get(wheel).channel, channel);
            assert!(!config.get(wheel).invert_direction);
        }
    }

    #[test]
    fn test_get_mut() {
        let mut config = WheelsConfig::default();
        config.get_mut(Wheel::RearLeft).invert_direction = true;
        assert!(config.rear_left.invert_direction);
        assert!(!config.rear_right.invert_direction);
    }
}
