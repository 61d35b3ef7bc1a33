//! Per-feature heat observations

use serde::{Deserialize, Serialize};

use crate::error::EncodingError;

/// A single observation attached to a map feature or chart datum
///
/// `value` is a surface temperature (°C) or any generic metric,
/// `secondary` an anomaly-style signal such as SUHII, and `class_label` a
/// land-use category name taken verbatim from the source data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeatSample {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_label: Option<String>,
}

impl HeatSample {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            secondary: None,
            class_label: None,
        }
    }

    #[must_use]
    pub fn with_secondary(mut self, secondary: f64) -> Self {
        self.secondary = Some(secondary);
        self
    }

    #[must_use]
    pub fn with_class(mut self, label: impl Into<String>) -> Self {
        self.class_label = Some(label.into());
        self
    }

    /// Take the value at `step` from a monthly (or any time-indexed) series.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::TimeStepOutOfRange` when `step` is past the end
    /// of `series` (an empty series rejects every step).
    pub fn from_series(
        series: &[f64],
        step: usize,
        secondary: Option<f64>,
    ) -> Result<Self, EncodingError> {
        let value = *series
            .get(step)
            .ok_or(EncodingError::TimeStepOutOfRange {
                step,
                len: series.len(),
            })?;
        Ok(Self {
            value,
            secondary,
            class_label: None,
        })
    }

    /// Check the numeric invariants: `value` and `secondary` must be finite.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::NonFiniteInput` naming the offending field.
    pub fn validate(&self) -> Result<(), EncodingError> {
        if !self.value.is_finite() {
            return Err(EncodingError::NonFiniteInput {
                what: "sample value",
                value: self.value,
            });
        }
        if let Some(secondary) = self.secondary {
            if !secondary.is_finite() {
                return Err(EncodingError::NonFiniteInput {
                    what: "secondary value",
                    value: secondary,
                });
            }
        }
        Ok(())
    }
}
