//! Color ramp engine
//!
//! A `ColorRamp` is an ordered list of `ColorBand`s that partition [0, 1].
//! Each band interpolates linearly between its two endpoint colors over
//! `[lower, upper)`; the last band is closed at 1.0. A band whose endpoints
//! are equal is a flat step, which is how stepped legends are expressed.
//!
//! The built-in thermal spectrum runs blue → cyan → green → yellow → red →
//! purple with stops every 0.2. Because each band is defined by its endpoint
//! colors, adjacent bands always agree at their shared boundary.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::core_types::{Fraction, Rgb, Rgba};
use crate::error::EncodingError;

/// Tolerance when checking that band bounds meet
const BOUND_EPSILON: f64 = 1e-9;

/// One contiguous segment of a color ramp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorBand {
    /// Inclusive lower bound in [0, 1]
    pub lower: f64,
    /// Exclusive upper bound in [0, 1] (inclusive for the final band)
    pub upper: f64,
    /// Color at `lower`
    pub start: Rgb,
    /// Color approached at `upper`
    pub end: Rgb,
}

impl ColorBand {
    #[must_use]
    pub const fn new(lower: f64, upper: f64, start: Rgb, end: Rgb) -> Self {
        Self {
            lower,
            upper,
            start,
            end,
        }
    }

    /// Constant-color band
    #[must_use]
    pub const fn flat(lower: f64, upper: f64, color: Rgb) -> Self {
        Self::new(lower, upper, color, color)
    }

    /// Interpolated color at ramp position `t` (saturated into this band)
    #[must_use]
    pub fn color_at(&self, t: f64) -> Rgb {
        let local = ((t - self.lower) / (self.upper - self.lower)).clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| {
            let a = f64::from(a);
            a + (f64::from(b) - a) * local
        };
        Rgb::from_channels(
            lerp(self.start.r, self.end.r),
            lerp(self.start.g, self.end.g),
            lerp(self.start.b, self.end.b),
        )
    }
}

/// Piecewise color ramp over [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColorBand>", into = "Vec<ColorBand>")]
pub struct ColorRamp {
    bands: Vec<ColorBand>,
}

static THERMAL: LazyLock<ColorRamp> = LazyLock::new(ColorRamp::thermal);

impl ColorRamp {
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const PURPLE: Rgb = Rgb::new(255, 0, 255);

    /// Build a ramp from explicit bands.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::InvalidBands` unless the bands are non-empty,
    /// start at 0, end at 1, each have `lower < upper`, and each band's upper
    /// bound equals the next band's lower bound.
    pub fn new(bands: Vec<ColorBand>) -> Result<Self, EncodingError> {
        let (first, last) = match (bands.first(), bands.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(EncodingError::InvalidBands("no bands".to_string())),
        };
        if first.lower.abs() > BOUND_EPSILON {
            return Err(EncodingError::InvalidBands(format!(
                "first band starts at {} instead of 0",
                first.lower
            )));
        }
        if (last.upper - 1.0).abs() > BOUND_EPSILON {
            return Err(EncodingError::InvalidBands(format!(
                "last band ends at {} instead of 1",
                last.upper
            )));
        }
        for (i, band) in bands.iter().enumerate() {
            if !(band.lower.is_finite() && band.upper.is_finite()) || band.lower >= band.upper {
                return Err(EncodingError::InvalidBands(format!(
                    "band {i} has bounds [{}, {})",
                    band.lower, band.upper
                )));
            }
        }
        for (i, pair) in bands.windows(2).enumerate() {
            if (pair[0].upper - pair[1].lower).abs() > BOUND_EPSILON {
                return Err(EncodingError::InvalidBands(format!(
                    "gap or overlap between band {i} (ends {}) and band {} (starts {})",
                    pair[0].upper,
                    i + 1,
                    pair[1].lower
                )));
            }
        }
        Ok(Self { bands })
    }

    /// Build a continuous ramp through `(position, color)` stops.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::InvalidBands` when fewer than two stops are
    /// given or the stops do not span [0, 1] in increasing order.
    pub fn from_stops(stops: &[(f64, Rgb)]) -> Result<Self, EncodingError> {
        if stops.len() < 2 {
            return Err(EncodingError::InvalidBands(
                "at least two stops are required".to_string(),
            ));
        }
        let bands = stops
            .windows(2)
            .map(|pair| ColorBand::new(pair[0].0, pair[1].0, pair[0].1, pair[1].1))
            .collect();
        Self::new(bands)
    }

    /// Five-band cold→hot thermal spectrum
    ///
    /// | t          | color         |
    /// |------------|---------------|
    /// | 0.0 → 0.2  | blue → cyan   |
    /// | 0.2 → 0.4  | cyan → green  |
    /// | 0.4 → 0.6  | green → yellow|
    /// | 0.6 → 0.8  | yellow → red  |
    /// | 0.8 → 1.0  | red → purple  |
    #[must_use]
    pub fn thermal() -> Self {
        Self {
            bands: vec![
                ColorBand::new(0.0, 0.2, Self::BLUE, Self::CYAN),
                ColorBand::new(0.2, 0.4, Self::CYAN, Self::GREEN),
                ColorBand::new(0.4, 0.6, Self::GREEN, Self::YELLOW),
                ColorBand::new(0.6, 0.8, Self::YELLOW, Self::RED),
                ColorBand::new(0.8, 1.0, Self::RED, Self::PURPLE),
            ],
        }
    }

    /// Two-stop green → red ramp used by the anomaly and sensor views
    #[must_use]
    pub fn green_red() -> Self {
        Self {
            bands: vec![ColorBand::new(0.0, 1.0, Self::GREEN, Self::RED)],
        }
    }

    /// Green → yellow → red with the midpoint at 0.5
    #[must_use]
    pub fn district() -> Self {
        Self {
            bands: vec![
                ColorBand::new(0.0, 0.5, Self::GREEN, Self::YELLOW),
                ColorBand::new(0.5, 1.0, Self::YELLOW, Self::RED),
            ],
        }
    }

    /// Five flat steps for the time-control legend
    #[must_use]
    pub fn legend_steps() -> Self {
        Self {
            bands: vec![
                ColorBand::flat(0.0, 0.2, Rgb::new(0x00, 0xa6, 0xfb)),
                ColorBand::flat(0.2, 0.4, Rgb::new(0x51, 0xcb, 0x20)),
                ColorBand::flat(0.4, 0.6, Rgb::new(0xff, 0xd5, 0x00)),
                ColorBand::flat(0.6, 0.8, Rgb::new(0xff, 0x7c, 0x43)),
                ColorBand::flat(0.8, 1.0, Rgb::new(0xff, 0x17, 0x17)),
            ],
        }
    }

    #[must_use]
    pub fn bands(&self) -> &[ColorBand] {
        &self.bands
    }

    /// Band containing `t`; the final band also owns t = 1.0
    #[must_use]
    pub fn band_for(&self, t: Fraction) -> &ColorBand {
        let t = t.value();
        let last = self.bands.len() - 1;
        self.bands[..last]
            .iter()
            .find(|band| t < band.upper)
            .unwrap_or(&self.bands[last])
    }

    /// Opaque color at `t`
    #[must_use]
    pub fn rgb_for(&self, t: Fraction) -> Rgb {
        self.band_for(t).color_at(t.value())
    }

    /// Color at `t` with the call site's alpha
    #[must_use]
    pub fn color_for(&self, t: Fraction, alpha: u8) -> Rgba {
        self.rgb_for(t).with_alpha(alpha)
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::thermal()
    }
}

impl TryFrom<Vec<ColorBand>> for ColorRamp {
    type Error = EncodingError;

    fn try_from(bands: Vec<ColorBand>) -> Result<Self, Self::Error> {
        ColorRamp::new(bands)
    }
}

impl From<ColorRamp> for Vec<ColorBand> {
    fn from(ramp: ColorRamp) -> Self {
        ramp.bands
    }
}

/// Thermal-spectrum color at `t`, using a shared read-only ramp
#[must_use]
pub fn color_for(t: Fraction, alpha: u8) -> Rgba {
    THERMAL.color_for(t, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thermal(t: f64) -> Rgb {
        ColorRamp::thermal().rgb_for(Fraction::new(t))
    }

    #[test]
    fn test_thermal_boundary_colors() {
        assert_eq!(thermal(0.0), ColorRamp::BLUE);
        assert_eq!(thermal(0.2), ColorRamp::CYAN);
        assert_eq!(thermal(0.4), ColorRamp::GREEN);
        assert_eq!(thermal(0.6), ColorRamp::YELLOW);
        assert_eq!(thermal(0.8), ColorRamp::RED);
        assert_eq!(thermal(1.0), ColorRamp::PURPLE);
    }

    #[test]
    fn test_band_endpoints_meet() {
        // Approaching each boundary from below lands on the next band's start color
        for (boundary, expected) in [
            (0.2, ColorRamp::CYAN),
            (0.4, ColorRamp::GREEN),
            (0.6, ColorRamp::YELLOW),
            (0.8, ColorRamp::RED),
        ] {
            assert_eq!(thermal(boundary - 1e-9), expected, "boundary {boundary}");
        }
    }

    #[test]
    fn test_matches_channel_formulas() {
        // Reference formulas per band, rounded to nearest
        let reference = |t: f64| -> Rgb {
            let c = |v: f64| (255.0 * v).round() as u8;
            if t < 0.2 {
                Rgb::new(0, c(5.0 * t), 255)
            } else if t < 0.4 {
                Rgb::new(0, 255, c(2.0 - 5.0 * t))
            } else if t < 0.6 {
                Rgb::new(c(5.0 * (t - 0.4)), 255, 0)
            } else if t < 0.8 {
                Rgb::new(255, c(2.0 - 5.0 * (t - 0.4)), 0)
            } else {
                Rgb::new(255, 0, c(5.0 * (t - 0.8)))
            }
        };
        for t in [0.05, 0.13, 0.27, 0.33, 0.47, 0.52, 0.64, 0.77, 0.86, 0.93] {
            let got = thermal(t);
            let want = reference(t);
            let close = |a: u8, b: u8| a.abs_diff(b) <= 1;
            assert!(
                close(got.r, want.r) && close(got.g, want.g) && close(got.b, want.b),
                "t={t}: got {got}, want {want}"
            );
        }
    }

    #[test]
    fn test_alpha_is_passed_through() {
        assert_eq!(color_for(Fraction::ZERO, 180), Rgba::new(0, 0, 255, 180));
        assert_eq!(color_for(Fraction::ONE, 42).a, 42);
    }

    #[test]
    fn test_legend_steps_are_flat() {
        let ramp = ColorRamp::legend_steps();
        assert_eq!(ramp.rgb_for(Fraction::new(0.1)).to_hex(), "#00a6fb");
        assert_eq!(ramp.rgb_for(Fraction::new(0.19)).to_hex(), "#00a6fb");
        assert_eq!(ramp.rgb_for(Fraction::new(0.2)).to_hex(), "#51cb20");
        assert_eq!(ramp.rgb_for(Fraction::new(0.5)).to_hex(), "#ffd500");
        assert_eq!(ramp.rgb_for(Fraction::new(0.79)).to_hex(), "#ff7c43");
        assert_eq!(ramp.rgb_for(Fraction::ONE).to_hex(), "#ff1717");
    }

    #[test]
    fn test_district_midpoint_is_yellow() {
        let ramp = ColorRamp::district();
        assert_eq!(ramp.rgb_for(Fraction::ZERO), ColorRamp::GREEN);
        assert_eq!(ramp.rgb_for(Fraction::new(0.5)), ColorRamp::YELLOW);
        assert_eq!(ramp.rgb_for(Fraction::ONE), ColorRamp::RED);
    }

    #[test]
    fn test_invalid_band_layouts_rejected() {
        let gap = vec![
            ColorBand::flat(0.0, 0.4, Rgb::BLACK),
            ColorBand::flat(0.5, 1.0, Rgb::WHITE),
        ];
        assert!(matches!(ColorRamp::new(gap), Err(EncodingError::InvalidBands(_))));

        let short = vec![ColorBand::flat(0.0, 0.9, Rgb::BLACK)];
        assert!(ColorRamp::new(short).is_err());

        let inverted = vec![
            ColorBand::flat(0.0, 0.6, Rgb::BLACK),
            ColorBand::flat(0.6, 0.6, Rgb::BLACK),
            ColorBand::flat(0.6, 1.0, Rgb::WHITE),
        ];
        assert!(ColorRamp::new(inverted).is_err());

        assert!(ColorRamp::new(Vec::new()).is_err());
        assert!(ColorRamp::from_stops(&[(0.0, Rgb::BLACK)]).is_err());
    }

    #[test]
    fn test_from_stops_builds_contiguous_bands() {
        let ramp = ColorRamp::from_stops(&[
            (0.0, ColorRamp::GREEN),
            (0.5, ColorRamp::YELLOW),
            (1.0, ColorRamp::RED),
        ])
        .unwrap();
        assert_eq!(ramp, ColorRamp::district());
    }

    #[test]
    fn test_builtin_ramps_pass_validation() {
        for ramp in [
            ColorRamp::thermal(),
            ColorRamp::green_red(),
            ColorRamp::district(),
            ColorRamp::legend_steps(),
        ] {
            assert!(ColorRamp::new(ramp.bands().to_vec()).is_ok());
        }
    }
}
