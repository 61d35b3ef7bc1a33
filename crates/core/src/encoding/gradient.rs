//! Gradient strips for time series (e.g. a city's twelve monthly temperatures)

use crate::core_types::{Percent, Rgb};
use crate::encoding::presets::ViewPreset;
use crate::error::EncodingError;

/// One color stop in a horizontal gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub color: Rgb,
    pub offset: Percent,
}

/// Color every value in `values` and space the stops evenly from 0% to 100%.
///
/// A single value produces one stop at 0%.
///
/// # Errors
///
/// Returns `EncodingError::EmptySeries` for an empty slice and
/// `EncodingError::NonFiniteInput` if any value is NaN.
pub fn gradient_stops(
    values: &[f64],
    preset: &ViewPreset,
) -> Result<Vec<GradientStop>, EncodingError> {
    if values.is_empty() {
        return Err(EncodingError::EmptySeries);
    }
    let last = (values.len() - 1).max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            Ok(GradientStop {
                color: preset.rgb_for(value)?,
                offset: Percent::new(i as f64 * 100.0 / last),
            })
        })
        .collect()
}

/// CSS `linear-gradient(to right, ...)` for the given stops
///
/// Offsets are written at full precision (`0%`, `9.090909090909092%`).
#[must_use]
pub fn css_linear_gradient(stops: &[GradientStop]) -> String {
    let stops: Vec<String> = stops
        .iter()
        .map(|stop| format!("{} {}%", stop.color.to_hex(), stop.offset.value()))
        .collect();
    format!("linear-gradient(to right, {})", stops.join(", "))
}
