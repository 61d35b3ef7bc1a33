//! Value domains and normalization into [0, 1]
//!
//! A `Domain` can only be built with `min < max`, finite bounds and a finite
//! width, so normalizing against one never divides by zero or infinity. The raw `normalize_range`
//! form is kept for call sites that only have two numbers.

use serde::{Deserialize, Serialize};

use crate::core_types::Fraction;
use crate::error::EncodingError;

/// Numeric range mapped onto [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DomainBounds", into = "DomainBounds")]
pub struct Domain {
    min: f64,
    max: f64,
}

/// Unvalidated `{min, max}` pair as written in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainBounds {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Surface temperature, 15-45 °C (extruded district layer)
    pub const TEMPERATURE: Domain = Domain { min: 15.0, max: 45.0 };

    /// Surface Urban Heat Island Intensity, 0-5
    pub const SUHII: Domain = Domain { min: 0.0, max: 5.0 };

    /// Generic percentage metric, 0-100
    pub const PERCENT: Domain = Domain { min: 0.0, max: 100.0 };

    /// SUHII range emphasised by the cooling simulator's class view
    pub const SUHII_CLASS_VIEW: Domain = Domain { min: 1.2, max: 3.0 };

    /// Ground-based sensor temperatures, 20-45 °C
    pub const GROUND_TEMPERATURE: Domain = Domain { min: 20.0, max: 45.0 };

    /// Time-control legend, 0-40 °C
    pub const LEGEND_TEMPERATURE: Domain = Domain { min: 0.0, max: 40.0 };

    /// Absolute ground vs. satellite difference, 0-10 °C
    pub const TEMPERATURE_DIFFERENCE: Domain = Domain { min: 0.0, max: 10.0 };

    /// Map-style district extrusion, 25-50 °C
    pub const DISTRICT_TEMPERATURE: Domain = Domain { min: 25.0, max: 50.0 };

    /// Vulnerability score, already in 0-1
    pub const UNIT: Domain = Domain { min: 0.0, max: 1.0 };

    /// Create a validated domain.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::NonFiniteInput` for a NaN or infinite bound or
    /// when `max - min` overflows, and `EncodingError::DegenerateDomain`
    /// unless `min < max`.
    pub fn new(min: f64, max: f64) -> Result<Self, EncodingError> {
        if !min.is_finite() {
            return Err(EncodingError::NonFiniteInput {
                what: "domain min",
                value: min,
            });
        }
        if !max.is_finite() {
            return Err(EncodingError::NonFiniteInput {
                what: "domain max",
                value: max,
            });
        }
        if min >= max {
            return Err(EncodingError::DegenerateDomain { min, max });
        }
        let span = max - min;
        if !span.is_finite() {
            return Err(EncodingError::NonFiniteInput {
                what: "domain span",
                value: span,
            });
        }
        Ok(Self { min, max })
    }

    #[inline]
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the domain (always positive)
    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Rescale `value` into [0, 1], saturating outside the domain.
    ///
    /// `±∞` saturate like any other out-of-range value.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::NonFiniteInput` when `value` is NaN.
    pub fn normalize(&self, value: f64) -> Result<Fraction, EncodingError> {
        if value.is_nan() {
            return Err(EncodingError::NonFiniteInput {
                what: "value",
                value,
            });
        }
        Ok(Fraction::clamped((value - self.min) / self.span()))
    }

    /// Map a unit position back to a value in this domain
    #[inline]
    #[must_use]
    pub fn denormalize(&self, t: Fraction) -> f64 {
        self.min + t.value() * self.span()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl TryFrom<DomainBounds> for Domain {
    type Error = EncodingError;

    fn try_from(bounds: DomainBounds) -> Result<Self, Self::Error> {
        Domain::new(bounds.min, bounds.max)
    }
}

impl From<Domain> for DomainBounds {
    fn from(domain: Domain) -> Self {
        DomainBounds {
            min: domain.min,
            max: domain.max,
        }
    }
}

/// Normalize `value` against `domain`, clamping into [0, 1].
///
/// # Errors
///
/// Returns `EncodingError::NonFiniteInput` when `value` is NaN.
pub fn normalize(value: f64, domain: &Domain) -> Result<Fraction, EncodingError> {
    domain.normalize(value)
}

/// Normalize against raw bounds, validating them first.
///
/// # Errors
///
/// Returns `EncodingError::DegenerateDomain` when `min >= max` (for every
/// `value`), and `EncodingError::NonFiniteInput` for NaN inputs or
/// non-finite bounds.
pub fn normalize_range(value: f64, min: f64, max: f64) -> Result<Fraction, EncodingError> {
    Domain::new(min, max)?.normalize(value)
}
