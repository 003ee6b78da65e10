//! Builder pattern for MecanumDrive.

use embedded_hal::digital::OutputPin;

use crate::config::units::Rpm;
use crate::config::{
    validate_drive, validate_shaping, validate_wheels, DriveConfig, ShapingConfig, SystemConfig,
    WheelsConfig,
};
use crate::error::{ConfigError, Error, Result};
use crate::kinematics::Wheel;
use crate::shaping::InputShaper;

use super::driver::{MecanumDrive, WheelOutput};
use super::output::{AnalogOutput, Channel};

/// Builder for creating MecanumDrive instances.
pub struct MecanumDriveBuilder<DAC, DIR, EN>
where
    DAC: AnalogOutput,
    DIR: OutputPin,
    EN: OutputPin,
{
    output: Option<DAC>,
    pins: [Option<(DIR, EN)>; 4],
    drive: DriveConfig,
    shaping: ShapingConfig,
    wheels: WheelsConfig,
}

impl<DAC, DIR, EN> Default for MecanumDriveBuilder<DAC, DIR, EN>
where
    DAC: AnalogOutput,
    DIR: OutputPin,
    EN: OutputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<DAC, DIR, EN> MecanumDriveBuilder<DAC, DIR, EN>
where
    DAC: AnalogOutput,
    DIR: OutputPin,
    EN: OutputPin,
{
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            output: None,
            pins: [None, None, None, None],
            drive: DriveConfig::default(),
            shaping: ShapingConfig::default(),
            wheels: WheelsConfig::default(),
        }
    }

    /// Set the analog output device.
    pub fn output(mut self, device: DAC) -> Self {
        self.output = Some(device);
        self
    }

    /// Set one wheel's direction and enable pins.
    pub fn wheel_pins(mut self, wheel: Wheel, dir_pin: DIR, enable_pin: EN) -> Self {
        self.pins[wheel.index()] = Some((dir_pin, enable_pin));
        self
    }

    /// Map one wheel to an output channel.
    pub fn channel(mut self, wheel: Wheel, channel: Channel) -> Self {
        self.wheels.get_mut(wheel).channel = channel;
        self
    }

    /// Set one wheel's direction inversion (mirrored side of the chassis).
    pub fn invert_direction(mut self, wheel: Wheel, invert: bool) -> Self {
        self.wheels.get_mut(wheel).invert_direction = invert;
        self
    }

    /// Set the response shaping configuration.
    pub fn shaping(mut self, config: ShapingConfig) -> Self {
        self.shaping = config;
        self
    }

    /// Set the RPM scale for the diagnostic path.
    pub fn max_rpm(mut self, max_rpm: Rpm) -> Self {
        self.drive.max_rpm = max_rpm;
        self
    }

    /// Set the device's maximum channel code.
    pub fn full_scale(mut self, full_scale: u16) -> Self {
        self.drive.full_scale = full_scale;
        self
    }

    /// Configure drive, shaping, and wheel mapping from a SystemConfig.
    pub fn from_config(mut self, config: &SystemConfig) -> Self {
        self.drive = config.drive.clone();
        self.shaping = config.shaping.clone();
        self.wheels = config.wheels.clone();
        self
    }

    /// Build the MecanumDrive.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device or any wheel's pins are missing,
    /// or if the configuration fails validation.
    pub fn build(self) -> Result<MecanumDrive<DAC, DIR, EN>> {
        let dac = self.output.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("output device is required").unwrap(),
            ))
        })?;

        validate_drive(&self.drive)?;
        validate_shaping(&self.shaping)?;
        validate_wheels(&self.wheels)?;

        let [fl, fr, rl, rr] = self.pins;
        let (fl_dir, fl_en) = fl.ok_or_else(|| missing_pins(Wheel::FrontLeft))?;
        let (fr_dir, fr_en) = fr.ok_or_else(|| missing_pins(Wheel::FrontRight))?;
        let (rl_dir, rl_en) = rl.ok_or_else(|| missing_pins(Wheel::RearLeft))?;
        let (rr_dir, rr_en) = rr.ok_or_else(|| missing_pins(Wheel::RearRight))?;

        let wheels = [
            wheel_output(fl_dir, fl_en, &self.wheels, Wheel::FrontLeft),
            wheel_output(fr_dir, fr_en, &self.wheels, Wheel::FrontRight),
            wheel_output(rl_dir, rl_en, &self.wheels, Wheel::RearLeft),
            wheel_output(rr_dir, rr_en, &self.wheels, Wheel::RearRight),
        ];

        Ok(MecanumDrive::new(
            dac,
            wheels,
            InputShaper::from_config(&self.shaping),
            self.drive.max_rpm,
            self.drive.full_scale,
        ))
    }
}

fn wheel_output<DIR, EN>(
    dir_pin: DIR,
    enable_pin: EN,
    wheels: &WheelsConfig,
    wheel: Wheel,
) -> WheelOutput<DIR, EN>
where
    DIR: OutputPin,
    EN: OutputPin,
{
    let config = wheels.get(wheel);
    WheelOutput::new(dir_pin, enable_pin, config.channel, config.invert_direction)
}

fn missing_pins(wheel: Wheel) -> Error {
    let mut msg: heapless::String<128> = heapless::String::new();
    let _ = msg.push_str(wheel.name());
    let _ = msg.push_str(" pins are required");
    Error::Config(ConfigError::ParseError(msg))
}
