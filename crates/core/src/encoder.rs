//! Heat encoder
//!
//! Runs one `HeatSample` through the full pipeline:
//!
//! 1. normalize `value` on the primary domain
//! 2. normalize `secondary` (if any) on the secondary domain
//! 3. blend the two intensities
//! 4. look the blended intensity up on the ramp, with the configured alpha
//! 5. compute the extrusion height from the raw value and raw secondary
//! 6. look up the class color when the sample carries a label

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::EncodingConfig;
use crate::core_types::{opacity_to_alpha, Celsius, Fraction, HeatSample, Rgb, Rgba};
use crate::encoding::{blend, ViewPreset};
use crate::error::EncodingError;

/// Fill opacity of the 2D land-use map layer (class and SUHII views)
pub const CLASS_LAYER_OPACITY: f64 = 0.7;

/// Visual encoding of one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatEncoding {
    /// Fill color from the blended intensity
    pub fill: Rgba,
    /// Extrusion height
    pub elevation: f64,
    /// Land-use color, when the sample has a class label
    pub class_color: Option<Rgb>,
    /// Blended intensity that selected `fill`
    pub intensity: Fraction,
}

/// Encoder holding a validated, read-only configuration
///
/// Cheap to share: encoding never mutates the encoder, so one instance can
/// serve many threads.
#[derive(Debug, Clone)]
pub struct HeatEncoder {
    config: EncodingConfig,
    suhii_view: ViewPreset,
}

impl HeatEncoder {
    /// Create an encoder from `config`.
    ///
    /// # Errors
    ///
    /// Returns the validation error of `EncodingConfig::validate`.
    pub fn new(config: EncodingConfig) -> Result<Self, EncodingError> {
        config.validate()?;
        debug!(
            "HeatEncoder: primary=[{}, {}], secondary=[{}, {}], {} ramp bands, alpha={}",
            config.primary_domain.min(),
            config.primary_domain.max(),
            config.secondary_domain.min(),
            config.secondary_domain.max(),
            config.ramp.bands().len(),
            config.alpha
        );
        Ok(Self {
            config,
            suhii_view: ViewPreset::suhii_class_view(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &EncodingConfig {
        &self.config
    }

    /// Encode a single sample.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::NonFiniteInput` if `value` or `secondary` is
    /// NaN or infinite.
    pub fn encode(&self, sample: &HeatSample) -> Result<HeatEncoding, EncodingError> {
        sample.validate()?;
        let config = &self.config;

        let primary = config.primary_domain.normalize(sample.value)?;
        let secondary = sample
            .secondary
            .map(|s| config.secondary_domain.normalize(s))
            .transpose()?;
        let intensity = blend(primary, secondary, &config.blend_weights);

        let encoding = HeatEncoding {
            fill: config.ramp.color_for(intensity, config.alpha),
            elevation: config
                .elevation
                .height_for(Celsius::from(sample.value), sample.secondary),
            class_color: sample
                .class_label
                .as_deref()
                .map(|label| config.class_table.color_for(label)),
            intensity,
        };
        trace!(
            "encode value={} secondary={:?} -> intensity={} fill={}",
            sample.value,
            sample.secondary,
            intensity,
            encoding.fill
        );
        Ok(encoding)
    }

    /// Encode many samples in parallel; results keep the input order.
    #[must_use]
    pub fn encode_batch(&self, samples: &[HeatSample]) -> Vec<Result<HeatEncoding, EncodingError>> {
        debug!("Encoding batch of {} samples", samples.len());
        samples.par_iter().map(|sample| self.encode(sample)).collect()
    }

    /// Class-only view: the land-use color of `sample`, fallback when unlabeled.
    ///
    /// Drawn at the map layer's `CLASS_LAYER_OPACITY`.
    #[must_use]
    pub fn encode_class(&self, sample: &HeatSample) -> Rgba {
        self.config
            .class_table
            .color_for_label(sample.class_label.as_deref())
            .with_alpha(opacity_to_alpha(CLASS_LAYER_OPACITY))
    }

    /// SUHII view: green → red over SUHII 1.2-3.0, at `CLASS_LAYER_OPACITY`.
    ///
    /// A sample without a secondary value counts as SUHII 0 (green).
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::NonFiniteInput` for a NaN SUHII.
    pub fn encode_suhii_class_view(&self, sample: &HeatSample) -> Result<Rgba, EncodingError> {
        let suhii = sample.secondary.unwrap_or(0.0);
        self.suhii_view.color_for(suhii, opacity_to_alpha(CLASS_LAYER_OPACITY))
    }
}

impl Default for HeatEncoder {
    fn default() -> Self {
        Self {
            config: EncodingConfig::default(),
            suhii_view: ViewPreset::suhii_class_view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{BlendWeights, ColorRamp};
    use approx::assert_relative_eq;

    #[test]
    fn test_end_to_end_yellow_red_band() {
        let encoder = HeatEncoder::default();
        let encoding = encoder
            .encode(&HeatSample::new(35.0).with_secondary(3.0))
            .unwrap();

        // 0.3 · (20/30) + 0.7 · (3/5) = 0.62
        assert_relative_eq!(encoding.intensity.value(), 0.62, epsilon = 1e-12);
        let band = encoder.config().ramp.band_for(encoding.intensity);
        assert_eq!(band.start, ColorRamp::YELLOW);
        assert_eq!(band.end, ColorRamp::RED);
        assert_eq!(encoding.fill.r, 255);
        assert_eq!(encoding.fill.b, 0);
        assert_eq!(encoding.fill.a, 180);
        assert_relative_eq!(encoding.elevation, 35.0 * 50.0 * 1.6, epsilon = 1e-9);
        assert_eq!(encoding.class_color, None);
    }

    #[test]
    fn test_absent_secondary_uses_primary_only() {
        let encoder = HeatEncoder::default();
        let encoding = encoder.encode(&HeatSample::new(15.0)).unwrap();
        assert_eq!(encoding.intensity, Fraction::ZERO);
        assert_eq!(encoding.fill.rgb(), ColorRamp::BLUE);
        assert_eq!(encoding.elevation, 750.0);
    }

    #[test]
    fn test_class_color_only_when_labeled() {
        let encoder = HeatEncoder::default();
        let labeled = HeatSample::new(30.0).with_class("Water");
        assert_eq!(
            encoder.encode(&labeled).unwrap().class_color,
            Some(Rgb::new(0x41, 0x69, 0xe1))
        );
        let unlabeled = encoder.encode_class(&HeatSample::new(30.0));
        assert_eq!(unlabeled.rgb(), Rgb::new(0xbd, 0xbd, 0xbd));
        assert_eq!(unlabeled.a, 179);
    }

    #[test]
    fn test_non_finite_sample_rejected() {
        let encoder = HeatEncoder::default();
        assert!(encoder.encode(&HeatSample::new(f64::NAN)).is_err());
        assert!(encoder
            .encode(&HeatSample::new(30.0).with_secondary(f64::INFINITY))
            .is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EncodingConfig {
            blend_weights: BlendWeights {
                primary: f64::NAN,
                secondary: 0.7,
            },
            ..EncodingConfig::default()
        };
        assert!(HeatEncoder::new(config).is_err());
    }

    #[test]
    fn test_suhii_class_view() {
        let encoder = HeatEncoder::default();
        let low = encoder
            .encode_suhii_class_view(&HeatSample::new(30.0).with_secondary(1.0))
            .unwrap();
        assert_eq!(low.rgb(), ColorRamp::GREEN);
        assert_eq!(low.a, 179);
        let high = encoder
            .encode_suhii_class_view(&HeatSample::new(20.0).with_secondary(3.5))
            .unwrap();
        assert_eq!(high.rgb(), ColorRamp::RED);
    }

    #[test]
    fn test_suhii_class_view_missing_suhii_is_zero() {
        let encoder = HeatEncoder::default();
        for value in [30.0, 35.0, 45.0] {
            let color = encoder
                .encode_suhii_class_view(&HeatSample::new(value))
                .unwrap();
            assert_eq!(color.rgb(), ColorRamp::GREEN);
        }
    }
}
