//! Encoding configuration
//!
//! Everything the encoder treats as a constant lives here so a deployment
//! can swap palettes (e.g. a colorblind-safe ramp), class tables or blend
//! weights without touching code. Missing keys in a config file fall back to
//! the defaults of the spatial-analytics view.
//!
//! ```json
//! {
//!   "ramp": [
//!     { "lower": 0.0, "upper": 1.0, "start": "#ffffcc", "end": "#800026" }
//!   ],
//!   "blend_weights": { "primary": 0.5, "secondary": 0.5 },
//!   "alpha": 200
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::core_types::Rgba;
use crate::encoding::{BlendWeights, ClassColorTable, ColorRamp, Domain, ElevationScale};
use crate::error::EncodingError;

/// Complete set of encoding parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    /// Ramp for blended intensity → fill color
    pub ramp: ColorRamp,
    /// Land-use class colors
    pub class_table: ClassColorTable,
    /// Weights for primary (temperature) vs. secondary (SUHII) intensity
    pub blend_weights: BlendWeights,
    /// Temperature → extrusion height factors
    pub elevation: ElevationScale,
    /// Domain of `HeatSample::value`
    pub primary_domain: Domain,
    /// Domain of `HeatSample::secondary`
    pub secondary_domain: Domain,
    /// Alpha applied to every fill color
    pub alpha: u8,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            ramp: ColorRamp::thermal(),
            class_table: ClassColorTable::land_use(),
            blend_weights: BlendWeights::default(),
            elevation: ElevationScale::default(),
            primary_domain: Domain::TEMPERATURE,
            secondary_domain: Domain::SUHII,
            alpha: Rgba::OVERLAY_ALPHA,
        }
    }
}

impl EncodingConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::ConfigParse` for malformed JSON or any invalid
    /// part (degenerate domain, broken band layout, bad hex color), and the
    /// validation errors of `validate` for out-of-range weights or scales.
    pub fn from_json(json: &str) -> Result<Self, EncodingError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EncodingError::ConfigParse(e.to_string()))?;
        config.validate()?;
        debug!(
            "Loaded encoding config: {} bands, {} classes, weights={}/{}",
            config.ramp.bands().len(),
            config.class_table.len(),
            config.blend_weights.primary,
            config.blend_weights.secondary
        );
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::ConfigIo` if the file cannot be read, otherwise
    /// the errors of `from_json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EncodingError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| EncodingError::ConfigIo(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::ConfigParse` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, EncodingError> {
        serde_json::to_string_pretty(self).map_err(|e| EncodingError::ConfigParse(e.to_string()))
    }

    /// Check the parts whose types do not enforce their own invariants.
    ///
    /// Domains, ramps and colors are validated on construction.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::InvalidWeights` or
    /// `EncodingError::InvalidElevationScale`.
    pub fn validate(&self) -> Result<(), EncodingError> {
        self.blend_weights.validate()?;
        self.elevation.validate()?;
        if self.alpha == 0 {
            warn!("Encoding alpha is 0, every fill color will be fully transparent");
        }
        Ok(())
    }
}
