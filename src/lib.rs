//! # mecanum-drive
//!
//! Mecanum wheel drive kinematics and motor actuation with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Configuration-driven**: Define wheel channels and response shaping in TOML files
//! - **embedded-hal 1.0**: Uses `OutputPin` for direction and enable lines
//! - **no_std compatible**: Core library works without standard library
//! - **Ratio-preserving normalization**: Saturation never distorts the commanded motion vector
//! - **Per-wheel lifecycle**: Global and per-wheel enable state with glitch-free disable
//! - **Diagnostic RPM path**: Direct single-motor control bypassing kinematics
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mecanum_drive::{MecanumDrive, MotionIntent, SystemConfig, Wheel};
//!
//! // Load configuration from TOML
//! let config: SystemConfig = mecanum_drive::load_config("drive.toml")?;
//!
//! // Create the drive with an analog output device and embedded-hal pins
//! let mut drive = MecanumDrive::builder()
//!     .output(dac)
//!     .wheel_pins(Wheel::FrontLeft, fl_dir, fl_en)
//!     .wheel_pins(Wheel::FrontRight, fr_dir, fr_en)
//!     .wheel_pins(Wheel::RearLeft, rl_dir, rl_en)
//!     .wheel_pins(Wheel::RearRight, rr_dir, rr_en)
//!     .from_config(&config)
//!     .build()?;
//!
//! // Bring the output device online, then enable and drive
//! drive.initialize()?;
//! drive.enable_all()?;
//! drive.drive(MotionIntent::new(0.0, 1.0, 0.0))?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod drive;
pub mod error;
pub mod kinematics;
pub mod shaping;

// Re-exports for ergonomic API
pub use config::{
    validate_config, DriveConfig, ShapingConfig, SystemConfig, WheelConfig, WheelsConfig,
};
pub use drive::{rpm_to_power, AnalogOutput, Channel, MecanumDrive, MecanumDriveBuilder};
pub use error::{Error, Result};
pub use kinematics::{mix, MotionIntent, Wheel, WheelPowers};
pub use shaping::InputShaper;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::Rpm;
