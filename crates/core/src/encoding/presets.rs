//! Named domain + ramp pairs for the dashboard's individual views
//!
//! Each view used to carry its own inline normalization and color math. They
//! now share the same `Domain` and `ColorRamp` machinery and differ only in
//! the pair chosen here.

use serde::{Deserialize, Serialize};

use crate::core_types::{Rgb, Rgba};
use crate::encoding::domain::Domain;
use crate::encoding::spectrum::ColorRamp;
use crate::error::EncodingError;

/// A value domain paired with the ramp that colors it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewPreset {
    pub domain: Domain,
    pub ramp: ColorRamp,
}

impl ViewPreset {
    #[must_use]
    pub fn new(domain: Domain, ramp: ColorRamp) -> Self {
        Self { domain, ramp }
    }

    /// Thermal spectrum over 15-45 °C
    #[must_use]
    pub fn surface_temperature() -> Self {
        Self::new(Domain::TEMPERATURE, ColorRamp::thermal())
    }

    /// Green → red over SUHII 1.2-3.0 (cooling simulator)
    #[must_use]
    pub fn suhii_class_view() -> Self {
        Self::new(Domain::SUHII_CLASS_VIEW, ColorRamp::green_red())
    }

    /// Green → red over 20-45 °C (ground sensor markers)
    #[must_use]
    pub fn ground_sensor() -> Self {
        Self::new(Domain::GROUND_TEMPERATURE, ColorRamp::green_red())
    }

    /// Green → red over a 0-10 °C ground/satellite gap
    #[must_use]
    pub fn temperature_difference() -> Self {
        Self::new(Domain::TEMPERATURE_DIFFERENCE, ColorRamp::green_red())
    }

    /// Green → red over a 0-1 vulnerability score
    #[must_use]
    pub fn vulnerability() -> Self {
        Self::new(Domain::UNIT, ColorRamp::green_red())
    }

    /// Green → yellow → red over 25-50 °C (district extrusions)
    #[must_use]
    pub fn district() -> Self {
        Self::new(Domain::DISTRICT_TEMPERATURE, ColorRamp::district())
    }

    /// Five flat legend steps over 0-40 °C (time control)
    #[must_use]
    pub fn legend() -> Self {
        Self::new(Domain::LEGEND_TEMPERATURE, ColorRamp::legend_steps())
    }

    /// Normalize `value` and look up its color.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::NonFiniteInput` when `value` is NaN.
    pub fn rgb_for(&self, value: f64) -> Result<Rgb, EncodingError> {
        let t = self.domain.normalize(value)?;
        Ok(self.ramp.rgb_for(t))
    }

    /// Like `rgb_for` with an explicit alpha.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::NonFiniteInput` when `value` is NaN.
    pub fn color_for(&self, value: f64, alpha: u8) -> Result<Rgba, EncodingError> {
        Ok(self.rgb_for(value)?.with_alpha(alpha))
    }
}
