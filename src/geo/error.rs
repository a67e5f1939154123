//! Validation errors raised while constructing or parsing angles.

use thiserror::Error;

/// Reasons an angle, latitude, longitude or coordinate could not be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AngleError {
    #[error("{kind} value {value} is not a finite number")]
    NonFinite { kind: &'static str, value: f64 },

    #[error("{kind} magnitude {value}° exceeds the maximum of {max}°")]
    OutOfRange {
        kind: &'static str,
        value: f64,
        max: f64,
    },

    #[error("{kind} degrees {degrees} out of range (maximum {max})")]
    InvalidDegrees {
        kind: &'static str,
        degrees: u32,
        max: u32,
    },

    #[error("minutes {0} must be between 0 and 59")]
    InvalidMinutes(u32),

    #[error("seconds {0} must be between 0 and 59")]
    InvalidSeconds(u32),

    #[error("'{text}' is not a valid {kind}")]
    Malformed { kind: &'static str, text: String },

    #[error("{kind} '{text}' must end with one of {expected}")]
    MissingHemisphere {
        kind: &'static str,
        text: String,
        expected: String,
    },
}
