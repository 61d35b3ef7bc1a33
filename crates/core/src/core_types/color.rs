//! 8-bit color values and their text forms
//!
//! `Rgb` serializes as a `#rrggbb` hex string so configuration files read the
//! same way palettes are usually written. `Rgba` carries the per-call-site
//! alpha that map overlays need.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EncodingError;

/// Opaque 8-bit RGB color
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Round and clamp floating-point channels into 0-255.
    ///
    /// Rounds half away from zero, which matches half-up rounding for the
    /// non-negative values ramps produce.
    #[inline]
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: quantize(r),
            g: quantize(g),
            b: quantize(b),
        }
    }

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::InvalidHexColor` for any other shape or a
    /// non-hex digit.
    pub fn from_hex(hex: &str) -> Result<Self, EncodingError> {
        let invalid = || EncodingError::InvalidHexColor(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid())
                };
                Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                // #abc expands to #aabbcc
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..=i], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Lowercase `#rrggbb`
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgb(r, g, b)` functional notation
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl TryFrom<String> for Rgb {
    type Error = EncodingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> String {
        c.to_hex()
    }
}

/// 8-bit RGB color with alpha, as consumed by map layers (`[r, g, b, a]`)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Alpha used by extruded map overlays
    pub const OVERLAY_ALPHA: u8 = 180;

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Channels as an array, the layout deck.gl-style layers expect
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// CSS `rgba(r, g, b, a)` with alpha as a 0-1 opacity
    #[must_use]
    pub fn to_css(self) -> String {
        let opacity = f64::from(self.a) / 255.0;
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, opacity)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.r, self.g, self.b, self.a)
    }
}

/// Convert a 0-1 opacity (as used by CSS `fillOpacity`) into an alpha byte
#[inline]
#[must_use]
pub fn opacity_to_alpha(opacity: f64) -> u8 {
    quantize(opacity * 255.0)
}

#[inline]
fn quantize(channel: f64) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    channel.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip_lowercases() {
        let water = Rgb::from_hex("#4169E1").unwrap();
        assert_eq!(water, Rgb::new(65, 105, 225));
        assert_eq!(water.to_hex(), "#4169e1");
    }

    #[test]
    fn test_short_hex_expands() {
        assert_eq!(Rgb::from_hex("#fa0").unwrap(), Rgb::new(255, 170, 0));
        assert_eq!(Rgb::from_hex("bdbdbd").unwrap(), Rgb::new(189, 189, 189));
    }

    #[test]
    fn test_bad_hex_rejected() {
        for bad in ["", "#12345", "#gggggg", "#1234567", "#éé"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(EncodingError::InvalidHexColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_channels_rounds_and_clamps() {
        assert_eq!(Rgb::from_channels(-4.0, 127.5, 300.0), Rgb::new(0, 128, 255));
        assert_eq!(Rgb::from_channels(f64::NAN, 0.4, 254.6), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_css_forms() {
        assert_eq!(Rgb::new(255, 128, 0).to_css(), "rgb(255, 128, 0)");
        assert_eq!(
            Rgba::new(255, 0, 0, 204).to_css(),
            "rgba(255, 0, 0, 0.800)"
        );
        assert_eq!(opacity_to_alpha(0.8), 204);
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Rgb::new(46, 139, 87)).unwrap();
        assert_eq!(json, "\"#2e8b57\"");
        let back: Rgb = serde_json::from_str("\"#2e8b57\"").unwrap();
        assert_eq!(back, Rgb::new(46, 139, 87));
        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }
}
