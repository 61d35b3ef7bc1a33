//! Stateless encoding functions using the default palettes and scales.

use heat_encoding_core::{
    blend, color_for, color_for_class, normalize_range, BlendWeights, Celsius, ElevationScale,
    EncodingError, Fraction,
};
use std::os::raw::c_char;

use crate::error::{DefaultHeatError, HeatErrorCode};
use crate::helpers::{clear_last_error, str_from_ptr, track_error, track_result};
use crate::types::HeatColor;

fn finite(what: &'static str, value: f64) -> Result<f64, DefaultHeatError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EncodingError::NonFiniteInput { what, value }.into())
    }
}

fn fraction(what: &'static str, value: f64) -> Result<Fraction, DefaultHeatError> {
    if value.is_nan() {
        return Err(EncodingError::NonFiniteInput { what, value }.into());
    }
    Ok(Fraction::clamped(value))
}

/// Normalize `value` into [0, 1] against `[min, max]`, clamping outside.
///
/// Returns
/// - `HeatErrorCode::Ok` (0): success, `out_value` set
/// - `HeatErrorCode::NullPointer`: `out_value` is null
/// - `HeatErrorCode::DegenerateDomain`: `min >= max`
/// - `HeatErrorCode::NonFiniteInput`: `value` is NaN, or a bound is not finite
///
/// # Safety
/// `out_value` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn heat_normalize(
    value: f64,
    min: f64,
    max: f64,
    out_value: *mut f64,
) -> HeatErrorCode {
    if out_value.is_null() {
        return track_error(&DefaultHeatError::null_pointer("out_value"));
    }

    match track_result(normalize_range(value, min, max).map_err(DefaultHeatError::from)) {
        Ok(t) => {
            unsafe {
                *out_value = t.value();
            }
            HeatErrorCode::Ok
        }
        Err(code) => code,
    }
}

/// Thermal-spectrum color at `t` (blue → cyan → green → yellow → red → purple).
///
/// `t` outside [0, 1] saturates at the nearest end.
///
/// Returns
/// - `HeatErrorCode::Ok` (0): success, `out_color` set
/// - `HeatErrorCode::NullPointer`: `out_color` is null
/// - `HeatErrorCode::NonFiniteInput`: `t` is NaN
///
/// # Safety
/// `out_color` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn heat_color_for(
    t: f64,
    alpha: u8,
    out_color: *mut HeatColor,
) -> HeatErrorCode {
    if out_color.is_null() {
        return track_error(&DefaultHeatError::null_pointer("out_color"));
    }

    match track_result(fraction("ramp position", t)) {
        Ok(t) => {
            unsafe {
                *out_color = color_for(t, alpha).into();
            }
            HeatErrorCode::Ok
        }
        Err(code) => code,
    }
}

/// Blend two normalized intensities with the default weights (0.3 / 0.7).
///
/// When `has_secondary` is false, `primary` passes through unchanged.
///
/// Returns
/// - `HeatErrorCode::Ok` (0): success, `out_value` set
/// - `HeatErrorCode::NullPointer`: `out_value` is null
/// - `HeatErrorCode::NonFiniteInput`: an intensity in use is NaN
///
/// # Safety
/// `out_value` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn heat_blend(
    primary: f64,
    has_secondary: bool,
    secondary: f64,
    out_value: *mut f64,
) -> HeatErrorCode {
    if out_value.is_null() {
        return track_error(&DefaultHeatError::null_pointer("out_value"));
    }

    let blended = fraction("primary intensity", primary).and_then(|primary| {
        let secondary = has_secondary
            .then(|| fraction("secondary intensity", secondary))
            .transpose()?;
        Ok(blend(primary, secondary, &BlendWeights::default()))
    });
    match track_result(blended) {
        Ok(t) => {
            unsafe {
                *out_value = t.value();
            }
            HeatErrorCode::Ok
        }
        Err(code) => code,
    }
}

/// Extrusion height for a temperature, optionally boosted by SUHII.
///
/// `height = temperature · 50 · (1 + suhii · 0.2)`; the SUHII factor is
/// dropped when `has_suhii` is false.
///
/// Returns
/// - `HeatErrorCode::Ok` (0): success, `out_height` set
/// - `HeatErrorCode::NullPointer`: `out_height` is null
/// - `HeatErrorCode::NonFiniteInput`: an input in use is NaN or infinite
///
/// # Safety
/// `out_height` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn heat_elevation_for(
    temperature: f64,
    has_suhii: bool,
    suhii: f64,
    out_height: *mut f64,
) -> HeatErrorCode {
    if out_height.is_null() {
        return track_error(&DefaultHeatError::null_pointer("out_height"));
    }

    let height = finite("temperature", temperature).and_then(|temperature| {
        let suhii = has_suhii.then(|| finite("suhii", suhii)).transpose()?;
        Ok(ElevationScale::default().height_for(Celsius::from(temperature), suhii))
    });
    match track_result(height) {
        Ok(height) => {
            unsafe {
                *out_height = height;
            }
            HeatErrorCode::Ok
        }
        Err(code) => code,
    }
}

/// Opaque land-use color for `label`.
///
/// Lookup is exact and case-sensitive. A null label or an unknown one yields
/// the neutral fallback gray `#bdbdbd`.
///
/// Returns
/// - `HeatErrorCode::Ok` (0): success, `out_color` set
/// - `HeatErrorCode::NullPointer`: `out_color` is null
/// - `HeatErrorCode::InvalidParameter`: `label` is not UTF-8
///
/// # Safety
/// - `label` must be null or a valid null-terminated string.
/// - `out_color` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn heat_class_color(
    label: *const c_char,
    out_color: *mut HeatColor,
) -> HeatErrorCode {
    if out_color.is_null() {
        return track_error(&DefaultHeatError::null_pointer("out_color"));
    }

    let color = if label.is_null() {
        clear_last_error();
        color_for_class("")
    } else {
        match track_result(unsafe { str_from_ptr(label, "label") }) {
            Ok(label) => color_for_class(label),
            Err(code) => return code,
        }
    };
    unsafe {
        *out_color = color.into();
    }
    HeatErrorCode::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{heat_get_last_error, heat_get_last_error_code};
    use std::ffi::{CStr, CString};
    use std::ptr;

    #[test]
    fn test_normalize_and_degenerate_domain() {
        let mut t = -1.0;
        unsafe {
            assert_eq!(heat_normalize(35.0, 15.0, 45.0, &mut t), HeatErrorCode::Ok);
            assert!((t - 2.0 / 3.0).abs() < 1e-12);
            assert_eq!(heat_normalize(99.0, 15.0, 45.0, &mut t), HeatErrorCode::Ok);
            assert_eq!(t, 1.0);

            assert_eq!(
                heat_normalize(10.0, 30.0, 30.0, &mut t),
                HeatErrorCode::DegenerateDomain
            );
            assert_eq!(heat_get_last_error_code(), HeatErrorCode::DegenerateDomain);
            let msg = CStr::from_ptr(heat_get_last_error()).to_str().unwrap();
            assert!(msg.contains("Degenerate domain"), "{msg}");

            assert_eq!(
                heat_normalize(10.0, 0.0, 1.0, ptr::null_mut()),
                HeatErrorCode::NullPointer
            );
        }
    }

    #[test]
    fn test_success_clears_last_error() {
        let mut t = 0.0;
        unsafe {
            assert_eq!(
                heat_normalize(f64::NAN, 0.0, 1.0, &mut t),
                HeatErrorCode::NonFiniteInput
            );
            assert_eq!(heat_normalize(0.5, 0.0, 1.0, &mut t), HeatErrorCode::Ok);
        }
        assert_eq!(heat_get_last_error_code(), HeatErrorCode::Ok);
        assert!(heat_get_last_error().is_null());
    }

    #[test]
    fn test_color_for_anchors() {
        let mut color = HeatColor::default();
        unsafe {
            assert_eq!(heat_color_for(0.6, 180, &mut color), HeatErrorCode::Ok);
            assert_eq!(color, HeatColor { r: 255, g: 255, b: 0, a: 180 });
            assert_eq!(heat_color_for(7.0, 255, &mut color), HeatErrorCode::Ok);
            assert_eq!(color, HeatColor { r: 255, g: 0, b: 255, a: 255 });
            assert_eq!(
                heat_color_for(f64::NAN, 255, &mut color),
                HeatErrorCode::NonFiniteInput
            );
        }
    }

    #[test]
    fn test_blend_and_elevation() {
        let mut value = 0.0;
        unsafe {
            assert_eq!(heat_blend(0.4, false, f64::NAN, &mut value), HeatErrorCode::Ok);
            assert_eq!(value, 0.4);
            assert_eq!(heat_blend(2.0 / 3.0, true, 0.6, &mut value), HeatErrorCode::Ok);
            assert!((value - 0.62).abs() < 1e-12);

            assert_eq!(heat_elevation_for(20.0, false, 0.0, &mut value), HeatErrorCode::Ok);
            assert_eq!(value, 1000.0);
            assert_eq!(heat_elevation_for(30.0, true, 2.5, &mut value), HeatErrorCode::Ok);
            assert!((value - 2250.0).abs() < 1e-9);
            assert_eq!(
                heat_elevation_for(f64::INFINITY, false, 0.0, &mut value),
                HeatErrorCode::NonFiniteInput
            );
        }
    }

    #[test]
    fn test_class_color() {
        let mut color = HeatColor::default();
        let water = CString::new("Water").unwrap();
        let unknown = CString::new("unknown-xyz").unwrap();
        unsafe {
            assert_eq!(heat_class_color(water.as_ptr(), &mut color), HeatErrorCode::Ok);
            assert_eq!(color, HeatColor { r: 0x41, g: 0x69, b: 0xe1, a: 255 });
            assert_eq!(heat_class_color(unknown.as_ptr(), &mut color), HeatErrorCode::Ok);
            assert_eq!(color, HeatColor { r: 0xbd, g: 0xbd, b: 0xbd, a: 255 });
            assert_eq!(heat_class_color(ptr::null(), &mut color), HeatErrorCode::Ok);
            assert_eq!(color, HeatColor { r: 0xbd, g: 0xbd, b: 0xbd, a: 255 });
        }
    }
}
