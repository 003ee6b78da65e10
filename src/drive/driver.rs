//! Mecanum drive actuation engine.
//!
//! Generic over the analog output device and embedded-hal 1.0 pin types.

use embedded_hal::digital::OutputPin;
use libm::{fabsf, roundf};

use crate::config::units::Rpm;
use crate::error::{ConfigError, DriveError, Result};
use crate::kinematics::{mix, MotionIntent, Wheel, WheelPowers};
use crate::shaping::InputShaper;

use super::output::{AnalogOutput, Channel};
use super::rpm::rpm_to_power;

/// One wheel's actuation resources: direction line, enable line, output
/// channel, and per-wheel state.
pub(crate) struct WheelOutput<DIR, EN>
where
    DIR: OutputPin,
    EN: OutputPin,
{
    /// Direction pin (low = forward/CW, high = reverse/CCW).
    dir_pin: DIR,

    /// Enable pin for this wheel's amplifier.
    enable_pin: EN,

    /// Output channel on the analog device.
    channel: Channel,

    /// Whether direction pin logic is inverted (mirrored side of the chassis).
    invert_direction: bool,

    /// Per-wheel enable flag; ANDed with the global flag.
    enabled: bool,
}

impl<DIR, EN> WheelOutput<DIR, EN>
where
    DIR: OutputPin,
    EN: OutputPin,
{
    pub(crate) fn new(dir_pin: DIR, enable_pin: EN, channel: Channel, invert_direction: bool) -> Self {
        Self {
            dir_pin,
            enable_pin,
            channel,
            invert_direction,
            enabled: true,
        }
    }
}

/// Mecanum drive: inverse kinematics, response shaping, normalization, and
/// the motor enable/output lifecycle for a four-wheel chassis.
///
/// Generic over:
/// - `DAC`: the 4-channel analog output device (must implement [`AnalogOutput`])
/// - `DIR`: direction pin type (must implement `OutputPin`)
/// - `EN`: enable pin type (must implement `OutputPin`)
///
/// The drive exclusively owns the device and all eight pins. It starts
/// disabled; call [`initialize`](Self::initialize) once, then
/// [`enable_all`](Self::enable_all) before driving.
pub struct MecanumDrive<DAC, DIR, EN>
where
    DAC: AnalogOutput,
    DIR: OutputPin,
    EN: OutputPin,
{
    /// Analog output device, one channel per wheel.
    dac: DAC,

    /// Per-wheel outputs, indexed by [`Wheel`] in actuation order.
    wheels: [WheelOutput<DIR, EN>; 4],

    /// Response shaping applied to raw intent.
    shaper: InputShaper,

    /// Last commanded power per wheel, exposed for diagnostics.
    powers: WheelPowers,

    /// RPM scale for the diagnostic path.
    max_rpm: Rpm,

    /// Maximum output code accepted by a channel.
    full_scale: u16,

    /// Global enable flag; gates every channel.
    enabled: bool,
}

impl<DAC, DIR, EN> MecanumDrive<DAC, DIR, EN>
where
    DAC: AnalogOutput,
    DIR: OutputPin,
    EN: OutputPin,
{
    /// Create a builder for a new drive.
    pub fn builder() -> super::MecanumDriveBuilder<DAC, DIR, EN> {
        super::MecanumDriveBuilder::new()
    }

    pub(crate) fn new(
        dac: DAC,
        wheels: [WheelOutput<DIR, EN>; 4],
        shaper: InputShaper,
        max_rpm: Rpm,
        full_scale: u16,
    ) -> Self {
        Self {
            dac,
            wheels,
            shaper,
            powers: WheelPowers::ZERO,
            max_rpm,
            full_scale,
            enabled: false,
        }
    }

    /// Bring the output device online and establish the disabled state.
    ///
    /// Zeroes all four channels and drives every enable pin low. Pins are
    /// only touched after the device check succeeds; on failure no
    /// partially-initialized state is retained.
    pub fn initialize(&mut self) -> Result<()> {
        self.dac.init().map_err(|_| DriveError::DeviceInit)?;
        self.reset_outputs()?;

        self.enabled = false;
        for wheel in Wheel::ALL {
            self.write_enable_pin(wheel)?;
        }

        Ok(())
    }

    /// Run one continuous-path control cycle.
    ///
    /// Shapes the intent, maps it through the inverse kinematics, normalizes
    /// the wheel powers back into [-1, 1], and applies all four outputs in
    /// wheel order (FL, FR, RL, RR).
    pub fn drive(&mut self, intent: MotionIntent) -> Result<()> {
        let shaped = self.shaper.shape(intent.clamped());
        let powers = mix(shaped).normalized();

        for wheel in Wheel::ALL {
            self.set_wheel_output(wheel, powers.get(wheel))?;
        }

        Ok(())
    }

    /// Command zero motion on all four wheels.
    pub fn stop(&mut self) -> Result<()> {
        self.drive(MotionIntent::ZERO)
    }

    /// Set one wheel's output power directly.
    ///
    /// `power` is clamped to [-1, 1] and recorded regardless of enable
    /// state, so diagnostics can preview computed values for a disabled
    /// motor. The physical direction pin and channel are only written when
    /// both the global and the per-wheel enable flags are set; a gated wheel
    /// keeps the zero its channel received on the disable edge.
    pub fn set_wheel_output(&mut self, wheel: Wheel, power: f32) -> Result<()> {
        let power = power.clamp(-1.0, 1.0);
        self.powers.set(wheel, power);

        if self.enabled && self.wheels[wheel.index()].enabled {
            self.apply_output(wheel, power)?;
        }

        Ok(())
    }

    /// Drive one motor at a requested RPM, bypassing kinematics.
    ///
    /// The RPM is clamped to `[0, max_rpm]` and translated linearly into the
    /// power domain (see [`rpm_to_power`]).
    pub fn set_motor_rpm(&mut self, wheel: Wheel, rpm: Rpm, forward: bool) -> Result<()> {
        let power = rpm_to_power(rpm, self.max_rpm, forward);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "motor {}: rpm {} -> power {}",
            wheel.name(),
            rpm.value(),
            power
        );

        self.set_wheel_output(wheel, power)
    }

    /// Reconfigure the RPM scale for subsequent diagnostic calls.
    ///
    /// Does not retroactively rescale already-applied outputs.
    pub fn set_max_rpm(&mut self, max_rpm: Rpm) -> Result<()> {
        if max_rpm.value() <= 0.0 {
            return Err(ConfigError::InvalidMaxRpm(max_rpm.value()).into());
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("max RPM set to {}", max_rpm.value());

        self.max_rpm = max_rpm;
        Ok(())
    }

    /// Assert the global enable flag and energize every wheel whose
    /// per-wheel flag is set.
    pub fn enable_all(&mut self) -> Result<()> {
        self.enabled = true;
        for wheel in Wheel::ALL {
            self.write_enable_pin(wheel)?;
        }
        Ok(())
    }

    /// De-assert the global enable flag.
    ///
    /// All four channels are forced to zero magnitude *before* the enable
    /// pins drop, so no channel is left mid-power for the next enable edge.
    /// Per-wheel flags are retained.
    pub fn disable_all(&mut self) -> Result<()> {
        self.reset_outputs()?;
        self.enabled = false;
        for wheel in Wheel::ALL {
            self.write_enable_pin(wheel)?;
        }
        Ok(())
    }

    /// Set one wheel's enable flag; energized only while the global flag is
    /// also set. Used by the diagnostic path to isolate a single motor.
    pub fn enable_wheel(&mut self, wheel: Wheel) -> Result<()> {
        self.wheels[wheel.index()].enabled = true;
        self.write_enable_pin(wheel)
    }

    /// Clear one wheel's enable flag, zeroing its channel first.
    pub fn disable_wheel(&mut self, wheel: Wheel) -> Result<()> {
        let channel = self.wheels[wheel.index()].channel;
        self.dac
            .set_channel(channel, 0)
            .map_err(|_| DriveError::ChannelWrite(channel))?;

        self.wheels[wheel.index()].enabled = false;
        self.write_enable_pin(wheel)
    }

    /// Whether the global enable flag is set.
    #[inline]
    pub fn motors_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a wheel's per-wheel enable flag is set.
    #[inline]
    pub fn is_wheel_enabled(&self, wheel: Wheel) -> bool {
        self.wheels[wheel.index()].enabled
    }

    /// Last commanded power for one wheel.
    #[inline]
    pub fn wheel_power(&self, wheel: Wheel) -> f32 {
        self.powers.get(wheel)
    }

    /// Last commanded power set for all four wheels.
    #[inline]
    pub fn wheel_powers(&self) -> WheelPowers {
        self.powers
    }

    /// The configured RPM scale.
    #[inline]
    pub fn max_rpm(&self) -> Rpm {
        self.max_rpm
    }

    /// The device's maximum channel code.
    #[inline]
    pub fn full_scale(&self) -> u16 {
        self.full_scale
    }

    /// Borrow the output device (for diagnostics and tests).
    #[inline]
    pub fn output(&self) -> &DAC {
        &self.dac
    }

    /// Zero all four output channels.
    fn reset_outputs(&mut self) -> Result<()> {
        for wheel in Wheel::ALL {
            let channel = self.wheels[wheel.index()].channel;
            self.dac
                .set_channel(channel, 0)
                .map_err(|_| DriveError::ChannelWrite(channel))?;
        }
        Ok(())
    }

    /// Write one wheel's enable pin from `global && wheel`.
    fn write_enable_pin(&mut self, wheel: Wheel) -> Result<()> {
        let energize = self.enabled && self.wheels[wheel.index()].enabled;
        let pin = &mut self.wheels[wheel.index()].enable_pin;

        if energize {
            pin.set_high().map_err(|_| DriveError::PinError)?;
        } else {
            pin.set_low().map_err(|_| DriveError::PinError)?;
        }

        Ok(())
    }

    /// Write one wheel's direction pin and channel code.
    fn apply_output(&mut self, wheel: Wheel, power: f32) -> Result<()> {
        let output = &mut self.wheels[wheel.index()];
        let channel = output.channel;

        let value = if output.invert_direction { -power } else { power };

        // Direction: low = forward/CW, high = reverse/CCW
        if value >= 0.0 {
            output.dir_pin.set_low().map_err(|_| DriveError::PinError)?;
        } else {
            output.dir_pin.set_high().map_err(|_| DriveError::PinError)?;
        }

        // Scale [-1, 1] to [0, full_scale]
        let code = roundf(fabsf(value) * self.full_scale as f32) as u16;
        let code = code.min(self.full_scale);

        self.dac
            .set_channel(channel, code)
            .map_err(|_| DriveError::ChannelWrite(channel))?;

        Ok(())
    }
}
