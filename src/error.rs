//! Error types for orrery.
//!
//! This module provides error types for configuration validation, body
//! system construction, and texture import/export.

use std::fmt;

/// Errors raised while validating or loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Grid dimensions must both be non-zero.
    InvalidDimensions {
        /// Requested grid width.
        width: u32,
        /// Requested grid height.
        height: u32,
    },
    /// A numeric parameter was outside its allowed range.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A tunable parameter name that the target does not expose.
    UnknownParameter(String),
    /// A color string that is not `#rrggbb` hex.
    InvalidColor(String),
    /// Failed to read or write a config file.
    Io(std::io::Error),
    /// Failed to parse or serialize JSON.
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { width, height } => write!(
                f,
                "Invalid grid dimensions {}x{}: width and height must be greater than zero",
                width, height
            ),
            ConfigError::InvalidParameter { name, value } => {
                write!(f, "Invalid value for '{}': {}", name, value)
            }
            ConfigError::UnknownParameter(name) => write!(f, "Unknown parameter '{}'", name),
            ConfigError::InvalidColor(color) => {
                write!(f, "Invalid color '{}': expected #rrggbb", color)
            }
            ConfigError::Io(e) => write!(f, "Failed to access config file: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// Errors raised when building or growing a [`BodySystem`](crate::orbits::BodySystem).
#[derive(Debug, Clone, PartialEq)]
pub enum SystemError {
    /// A body list was required but none were given.
    Empty,
    /// The system already holds its maximum number of bodies.
    CapacityReached(usize),
    /// Body mass must be finite and strictly positive.
    InvalidMass {
        /// Index the body would have taken.
        index: usize,
        /// Offending mass.
        mass: f64,
    },
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::Empty => write!(f, "Body system requires at least one body"),
            SystemError::CapacityReached(max) => {
                write!(f, "Body system is full ({} bodies maximum)", max)
            }
            SystemError::InvalidMass { index, mass } => write!(
                f,
                "Body {} has invalid mass {}: mass must be finite and positive",
                index, mass
            ),
        }
    }
}

impl std::error::Error for SystemError {}

/// Errors that can occur during texture loading and saving.
#[derive(Debug)]
pub enum TextureError {
    /// Failed to decode or encode an image.
    Image(image::ImageError),
    /// Failed to read or write the file.
    Io(std::io::Error),
    /// Pixel data length does not match the declared dimensions.
    SizeMismatch {
        /// Bytes implied by width, height and format.
        expected: usize,
        /// Bytes actually supplied.
        actual: usize,
    },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::Image(e) => write!(f, "Failed to process image: {}", e),
            TextureError::Io(e) => write!(f, "Failed to access texture file: {}", e),
            TextureError::SizeMismatch { expected, actual } => write!(
                f,
                "Texture data size mismatch: expected {} bytes, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::Image(e) => Some(e),
            TextureError::Io(e) => Some(e),
            TextureError::SizeMismatch { .. } => None,
        }
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        TextureError::Image(e)
    }
}

impl From<std::io::Error> for TextureError {
    fn from(e: std::io::Error) -> Self {
        TextureError::Io(e)
    }
}
