//! Heat visual encoding building blocks
//!
//! Leaves first: `domain` (normalizer), `spectrum` (color ramp engine),
//! `blend` (composite blender), `elevation` (extrusion heights) and
//! `classes` (land-use colors). `presets` and `gradient` combine them for
//! specific dashboard views.

pub mod blend;
pub mod classes;
pub mod domain;
pub mod elevation;
pub mod gradient;
pub mod presets;
pub mod spectrum;

pub use blend::{blend, BlendWeights};
pub use classes::{color_for_class, ClassColorTable};
pub use domain::{normalize, normalize_range, Domain, DomainBounds};
pub use elevation::{elevation_for, ElevationScale};
pub use gradient::{css_linear_gradient, gradient_stops, GradientStop};
pub use presets::ViewPreset;
pub use spectrum::{color_for, ColorBand, ColorRamp};
