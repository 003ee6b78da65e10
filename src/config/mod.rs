//! Configuration module for mecanum-drive.
//!
//! Provides types for loading and validating drive, shaping, and wheel
//! configurations from TOML files (with `std` feature) or pre-parsed data.

mod drive;
#[cfg(feature = "std")]
mod loader;
mod shaping;
mod system;
pub mod units;
mod validation;
mod wheels;

pub use drive::DriveConfig;
pub use shaping::ShapingConfig;
pub use system::SystemConfig;
pub use validation::{validate_config, validate_drive, validate_shaping, validate_wheels};
pub use wheels::{WheelConfig, WheelsConfig};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::Rpm;
