//! Heat Visual Encoding Core Library
//!
//! Turns urban heat observations (surface temperature, SUHII, land-use
//! class) into the visual channels a map or chart needs: fill color,
//! extrusion height and categorical class color.
//!
//! ## Pipeline
//!
//! - `encoding::domain` normalizes raw values into [0, 1]
//! - `encoding::blend` mixes primary and secondary intensities
//! - `encoding::spectrum` maps intensity to color through banded ramps
//! - `encoding::elevation` scales temperature into extrusion height
//! - `encoding::classes` looks up land-use colors with a fallback
//!
//! `HeatEncoder` runs all of them for one sample using an `EncodingConfig`,
//! which can be loaded from JSON.

// Core types and utilities
pub mod core_types;
pub mod error;

// Encoding building blocks
pub mod encoding;

// Configuration, the full pipeline and mock data
pub mod config;
pub mod encoder;
pub mod fixtures;

// Re-export core types
pub use core_types::{opacity_to_alpha, Celsius, Fraction, HeatSample, Percent, Rgb, Rgba};
pub use error::EncodingError;

// Re-export encoding types
pub use encoding::{
    blend, color_for, color_for_class, css_linear_gradient, elevation_for, gradient_stops,
    normalize, normalize_range, BlendWeights, ClassColorTable, ColorBand, ColorRamp, Domain,
    ElevationScale, GradientStop, ViewPreset,
};

pub use config::EncodingConfig;
pub use encoder::{HeatEncoder, HeatEncoding, CLASS_LAYER_OPACITY};
pub use fixtures::FixtureGenerator;
