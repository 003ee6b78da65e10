//! Motor actuation: output device abstraction, per-wheel outputs, the
//! enable/output lifecycle, and the diagnostic RPM path.

mod builder;
mod driver;
mod output;
mod rpm;

pub use builder::MecanumDriveBuilder;
pub use driver::MecanumDrive;
pub use output::{AnalogOutput, Channel};
pub use rpm::rpm_to_power;
