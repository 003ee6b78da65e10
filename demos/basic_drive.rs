//! Basic continuous drive example.
//!
//! Demonstrates building a mecanum drive from TOML configuration and running
//! a few control cycles. Uses mock hardware so it runs without a robot.

use mecanum_drive::{AnalogOutput, Channel, MecanumDrive, MotionIntent, Wheel};

/// Mock 4-channel DAC for demonstration.
struct MockDac {
    codes: [u16; 4],
}

impl MockDac {
    fn new() -> Self {
        Self { codes: [0; 4] }
    }
}

impl AnalogOutput for MockDac {
    type Error = core::convert::Infallible;

    fn init(&mut self) -> Result<(), Self::Error> {
        // In real code, this would probe the device on its bus
        Ok(())
    }

    fn set_channel(&mut self, channel: Channel, code: u16) -> Result<(), Self::Error> {
        self.codes[channel.index()] = code;
        Ok(())
    }
}

/// Mock output pin for demonstration.
struct MockPin {
    state: bool,
}

impl MockPin {
    fn new() -> Self {
        Self { state: false }
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

const CONFIG: &str = r#"
[drive]
max_rpm = 75.0
full_scale = 4095

[shaping]
ramp_exponent = 2.0
strafe_scale = 0.5

[wheels.front_left]
channel = "a"

[wheels.front_right]
channel = "b"
invert_direction = true

[wheels.rear_left]
channel = "c"

[wheels.rear_right]
channel = "d"
invert_direction = true
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Basic Mecanum Drive Example ===\n");

    let config = mecanum_drive::parse_config(CONFIG)?;

    let mut drive = MecanumDrive::builder()
        .output(MockDac::new())
        .wheel_pins(Wheel::FrontLeft, MockPin::new(), MockPin::new())
        .wheel_pins(Wheel::FrontRight, MockPin::new(), MockPin::new())
        .wheel_pins(Wheel::RearLeft, MockPin::new(), MockPin::new())
        .wheel_pins(Wheel::RearRight, MockPin::new(), MockPin::new())
        .from_config(&config)
        .build()?;

    drive.initialize()?;
    drive.enable_all()?;
    println!("Drive initialized, motors enabled\n");

    let moves = [
        ("forward", MotionIntent::new(0.0, 1.0, 0.0)),
        ("strafe right", MotionIntent::new(1.0, 0.0, 0.0)),
        ("turn clockwise", MotionIntent::new(0.0, 0.0, 1.0)),
        ("forward-right arc", MotionIntent::new(0.5, 0.8, 0.2)),
    ];

    for (label, intent) in moves {
        drive.drive(intent)?;
        let powers = drive.wheel_powers().as_array();
        println!(
            "{:18} FL {:+.3}  FR {:+.3}  RL {:+.3}  RR {:+.3}",
            label, powers[0], powers[1], powers[2], powers[3]
        );
    }

    drive.stop()?;
    drive.disable_all()?;
    println!("\nDrive stopped and disabled");

    Ok(())
}
