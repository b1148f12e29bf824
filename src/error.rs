//! Error types for plexus.
//!
//! Configuration setters and particle generation validate their inputs and
//! fail synchronously; nothing here is transient or retryable. A failed
//! operation leaves the scene untouched.

use std::fmt;

/// Errors raised by validated scene configuration setters.
///
/// Setters reject the value before mutating, so the previous valid
/// configuration always survives a failed call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A particle radius below the 0.5 minimum was supplied.
    RadiusTooSmall(f32),
    /// The minimum of a radius range was greater than the maximum.
    RadiusRangeInverted { min: f32, max: f32 },
    /// A line thickness below 1 was supplied.
    LineThicknessTooSmall(f32),
    /// A negative value was supplied where a non-negative one is required.
    NegativeValue { name: &'static str, value: f32 },
    /// NaN was supplied for the named parameter.
    NotANumber(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::RadiusTooSmall(value) => {
                write!(f, "Particle radius must not be less than 0.5, got {}", value)
            }
            ConfigError::RadiusRangeInverted { min, max } => write!(
                f,
                "Min radius must not be greater than max, but min = {}, max = {}",
                min, max
            ),
            ConfigError::LineThicknessTooSmall(value) => {
                write!(f, "Line thickness must not be less than 1, got {}", value)
            }
            ConfigError::NegativeValue { name, value } => {
                write!(f, "{} must not be negative, got {}", name, value)
            }
            ConfigError::NotANumber(name) => write!(f, "{} must be a valid float", name),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised when particle generation or frame advancement runs against
/// a scene that is not ready for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// The scene width or height is zero, so there is no region to place a
    /// particle in or move it through.
    EmptyBounds,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::EmptyBounds => {
                write!(f, "Cannot generate particles if scene width or height is 0")
            }
        }
    }
}

impl std::error::Error for SpawnError {}
