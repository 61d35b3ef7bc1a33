//! Composite blending of a primary and an optional secondary signal

use serde::{Deserialize, Serialize};

use crate::core_types::Fraction;
use crate::error::EncodingError;

/// Weights for the linear combination of two normalized signals
///
/// The defaults let an anomaly signal (SUHII) dominate absolute temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    pub primary: f64,
    pub secondary: f64,
}

impl BlendWeights {
    pub const DEFAULT_PRIMARY: f64 = 0.3;
    pub const DEFAULT_SECONDARY: f64 = 0.7;

    /// Create validated weights.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::InvalidWeights` when either weight is negative
    /// or not finite.
    pub fn new(primary: f64, secondary: f64) -> Result<Self, EncodingError> {
        let weights = Self { primary, secondary };
        weights.validate()?;
        Ok(weights)
    }

    /// Check that both weights are finite and non-negative, which keeps
    /// `blend` monotone in each input.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::InvalidWeights` otherwise.
    pub fn validate(&self) -> Result<(), EncodingError> {
        let ok = |w: f64| w.is_finite() && w >= 0.0;
        if ok(self.primary) && ok(self.secondary) {
            Ok(())
        } else {
            Err(EncodingError::InvalidWeights {
                primary: self.primary,
                secondary: self.secondary,
            })
        }
    }
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            primary: Self::DEFAULT_PRIMARY,
            secondary: Self::DEFAULT_SECONDARY,
        }
    }
}

/// Blend two normalized signals.
///
/// Without a secondary signal the primary passes through unchanged;
/// otherwise the weighted sum is clamped back into [0, 1].
#[inline]
#[must_use]
pub fn blend(primary: Fraction, secondary: Option<Fraction>, weights: &BlendWeights) -> Fraction {
    match secondary {
        None => primary,
        Some(secondary) => Fraction::clamped(
            weights.primary * primary.value() + weights.secondary * secondary.value(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_absent_secondary_passes_through() {
        let weights = BlendWeights::default();
        for p in [0.0, 0.13, 0.5, 0.999, 1.0] {
            let p = Fraction::new(p);
            assert_eq!(blend(p, None, &weights), p);
        }
    }

    #[test]
    fn test_default_weighting() {
        let t = blend(
            Fraction::new(2.0 / 3.0),
            Some(Fraction::new(0.6)),
            &BlendWeights::default(),
        );
        assert_relative_eq!(t.value(), 0.62, epsilon = 1e-12);
    }

    #[test]
    fn test_monotone_in_secondary() {
        let weights = BlendWeights::default();
        for p in [0.0, 0.4, 1.0] {
            let p = Fraction::new(p);
            let mut previous = Fraction::ZERO;
            for i in 0..=100 {
                let s = Fraction::new(f64::from(i) / 100.0);
                let t = blend(p, Some(s), &weights);
                assert!(t >= previous, "p={p}, s={s}: {t} < {previous}");
                previous = t;
            }
        }
    }

    #[test]
    fn test_heavy_weights_clamp() {
        let weights = BlendWeights::new(1.0, 1.0).unwrap();
        let t = blend(Fraction::new(0.8), Some(Fraction::new(0.9)), &weights);
        assert_eq!(t, Fraction::ONE);
    }

    #[test]
    fn test_invalid_weights_rejected() {
        assert!(BlendWeights::new(-0.1, 0.7).is_err());
        assert!(BlendWeights::new(0.3, f64::NAN).is_err());
        assert!(BlendWeights::new(0.0, 0.0).is_ok());
    }
}
