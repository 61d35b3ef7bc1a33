//! Errors raised by the encoding library
//!
//! Every failure is local and synchronous. Missing optional signals, unknown
//! class labels and out-of-domain values are handled by fallback or clamping
//! and never reach this type.

use std::fmt;

/// Errors that can occur while building or running an encoding
#[derive(Debug, Clone, PartialEq)]
pub enum EncodingError {
    /// Domain bounds do not satisfy `min < max`
    DegenerateDomain {
        /// Lower bound supplied
        min: f64,
        /// Upper bound supplied
        max: f64,
    },
    /// A numeric input was NaN (or a bound was infinite)
    NonFiniteInput {
        /// Which input was rejected
        what: &'static str,
        /// The rejected value
        value: f64,
    },
    /// A value that must lie in [0, 1] did not
    FractionOutOfRange(f64),
    /// Color bands do not partition [0, 1] contiguously
    InvalidBands(String),
    /// Blend weights must be finite and non-negative
    InvalidWeights {
        /// Weight applied to the primary signal
        primary: f64,
        /// Weight applied to the secondary signal
        secondary: f64,
    },
    /// Elevation factors must be finite
    InvalidElevationScale(String),
    /// A color string could not be parsed as `#rrggbb` or `#rgb`
    InvalidHexColor(String),
    /// Time step index is past the end of a temperature series
    TimeStepOutOfRange {
        /// Requested step
        step: usize,
        /// Series length
        len: usize,
    },
    /// A series-based operation was given no values
    EmptySeries,
    /// Configuration text could not be parsed
    ConfigParse(String),
    /// Configuration file could not be read
    ConfigIo(String),
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::DegenerateDomain { min, max } => {
                write!(f, "Degenerate domain: min ({min}) must be less than max ({max})")
            }
            EncodingError::NonFiniteInput { what, value } => {
                write!(f, "Non-finite {what}: {value}")
            }
            EncodingError::FractionOutOfRange(value) => {
                write!(f, "Fraction out of range [0, 1]: {value}")
            }
            EncodingError::InvalidBands(msg) => write!(f, "Invalid color bands: {msg}"),
            EncodingError::InvalidWeights { primary, secondary } => write!(
                f,
                "Invalid blend weights: primary={primary}, secondary={secondary} \
                 (must be finite and non-negative)"
            ),
            EncodingError::InvalidElevationScale(msg) => {
                write!(f, "Invalid elevation scale: {msg}")
            }
            EncodingError::InvalidHexColor(s) => write!(f, "Invalid hex color: '{s}'"),
            EncodingError::TimeStepOutOfRange { step, len } => {
                write!(f, "Time step {step} out of range for series of length {len}")
            }
            EncodingError::EmptySeries => write!(f, "Series contains no values"),
            EncodingError::ConfigParse(msg) => write!(f, "Failed to parse config: {msg}"),
            EncodingError::ConfigIo(msg) => write!(f, "Failed to read config: {msg}"),
        }
    }
}

impl std::error::Error for EncodingError {}
