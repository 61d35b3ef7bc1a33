//! Extrusion height for 3D district layers

use serde::{Deserialize, Serialize};

use crate::core_types::Celsius;
use crate::error::EncodingError;

/// Linear temperature → height scale with an optional SUHII boost
///
/// `height = temperature · height_per_degree · (1 + suhii · suhii_gain)`,
/// where the SUHII factor is dropped when no SUHII is known. Heights are not
/// clamped; renderers treat negative heights as flat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationScale {
    pub height_per_degree: f64,
    pub suhii_gain: f64,
}

impl ElevationScale {
    pub const DEFAULT_HEIGHT_PER_DEGREE: f64 = 50.0;
    pub const DEFAULT_SUHII_GAIN: f64 = 0.2;

    /// # Errors
    ///
    /// Returns `EncodingError::InvalidElevationScale` when a factor is not
    /// finite.
    pub fn validate(&self) -> Result<(), EncodingError> {
        if !self.height_per_degree.is_finite() {
            return Err(EncodingError::InvalidElevationScale(format!(
                "height_per_degree is {}",
                self.height_per_degree
            )));
        }
        if !self.suhii_gain.is_finite() {
            return Err(EncodingError::InvalidElevationScale(format!(
                "suhii_gain is {}",
                self.suhii_gain
            )));
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn height_for(&self, temperature: Celsius, suhii: Option<f64>) -> f64 {
        let base_height = temperature.value() * self.height_per_degree;
        match suhii {
            Some(suhii) => base_height * (1.0 + suhii * self.suhii_gain),
            None => base_height,
        }
    }
}

impl Default for ElevationScale {
    fn default() -> Self {
        Self {
            height_per_degree: Self::DEFAULT_HEIGHT_PER_DEGREE,
            suhii_gain: Self::DEFAULT_SUHII_GAIN,
        }
    }
}

/// Extrusion height with the default scale
#[inline]
#[must_use]
pub fn elevation_for(temperature: f64, suhii: Option<f64>) -> f64 {
    ElevationScale::default().height_for(Celsius::from(temperature), suhii)
}
