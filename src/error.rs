//! Error types for mecanum-drive library.
//!
//! Provides unified error handling across configuration and drive actuation.

use core::fmt;

use crate::drive::Channel;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all mecanum-drive operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Drive actuation error
    Drive(DriveError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Wheel name does not match any of the four wheel identities
    UnknownWheel(heapless::String<32>),
    /// Two wheels are mapped to the same output channel
    DuplicateChannel(Channel),
    /// Invalid maximum RPM (must be > 0)
    InvalidMaxRpm(f32),
    /// Invalid full-scale output code (must be > 0)
    InvalidFullScale(u16),
    /// Invalid ramp exponent (must be > 0)
    InvalidRampExponent(f32),
    /// Invalid strafe scale (must be in (0, 1])
    InvalidStrafeScale(f32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Drive actuation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum DriveError {
    /// Output device failed to start
    DeviceInit,
    /// Direction or enable pin operation failed
    PinError,
    /// Output channel write failed
    ChannelWrite(Channel),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Drive(e) => write!(f, "Drive error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::UnknownWheel(name) => {
                write!(
                    f,
                    "Unknown wheel '{}'. Valid wheels: front_left, front_right, rear_left, rear_right",
                    name
                )
            }
            ConfigError::DuplicateChannel(channel) => {
                write!(f, "Channel {} is mapped to more than one wheel", channel)
            }
            ConfigError::InvalidMaxRpm(v) => write!(f, "Invalid max RPM: {}. Must be > 0", v),
            ConfigError::InvalidFullScale(v) => {
                write!(f, "Invalid full-scale code: {}. Must be > 0", v)
            }
            ConfigError::InvalidRampExponent(v) => {
                write!(f, "Invalid ramp exponent: {}. Must be > 0", v)
            }
            ConfigError::InvalidStrafeScale(v) => {
                write!(f, "Invalid strafe scale: {}. Must be in (0, 1]", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for DriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveError::DeviceInit => write!(f, "Output device failed to initialize"),
            DriveError::PinError => write!(f, "GPIO pin operation failed"),
            DriveError::ChannelWrite(channel) => {
                write!(f, "Write to output channel {} failed", channel)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DriveError> for Error {
    fn from(e: DriveError) -> Self {
        Error::Drive(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for DriveError {}
