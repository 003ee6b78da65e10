//! Diagnostic single-motor RPM example.
//!
//! Mirrors a service-menu session: isolate each wheel in turn and sweep its
//! RPM through the configured range, bypassing the kinematics path.

use mecanum_drive::{AnalogOutput, Channel, MecanumDrive, Rpm, Wheel};

struct MockDac;

impl AnalogOutput for MockDac {
    type Error = core::convert::Infallible;

    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_channel(&mut self, channel: Channel, code: u16) -> Result<(), Self::Error> {
        println!("    channel {} <- {}", channel, code);
        Ok(())
    }
}

struct MockPin;

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Motor Diagnostic Example ===\n");

    let mut drive = MecanumDrive::builder()
        .output(MockDac)
        .wheel_pins(Wheel::FrontLeft, MockPin, MockPin)
        .wheel_pins(Wheel::FrontRight, MockPin, MockPin)
        .wheel_pins(Wheel::RearLeft, MockPin, MockPin)
        .wheel_pins(Wheel::RearRight, MockPin, MockPin)
        .max_rpm(Rpm(75.0))
        .build()?;

    drive.initialize()?;
    drive.enable_all()?;

    for wheel in Wheel::ALL {
        // Isolate this wheel
        for other in Wheel::ALL {
            if other == wheel {
                drive.enable_wheel(other)?;
            } else {
                drive.disable_wheel(other)?;
            }
        }

        println!("{}:", wheel.name());
        for rpm in [0.0, 25.0, 50.0, 75.0] {
            drive.set_motor_rpm(wheel, Rpm(rpm), true)?;
            println!(
                "  rpm {:5.1} -> power {:+.3}",
                rpm,
                drive.wheel_power(wheel)
            );
        }

        drive.set_motor_rpm(wheel, Rpm(0.0), true)?;
    }

    drive.disable_all()?;
    println!("\nAll motors disabled");

    Ok(())
}
