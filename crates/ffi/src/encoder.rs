use heat_encoding_core::{EncodingConfig, HeatEncoder, HeatSample};
use std::os::raw::c_char;
use std::ptr;

use crate::error::{DefaultHeatError, HeatErrorCode};
use crate::helpers::{str_from_ptr, track_error, track_result};
use crate::types::{HeatEncodingOutput, HeatSampleInput};

/// Opaque encoder handle.
///
/// Holds a validated configuration and is never mutated after creation, so a
/// single handle may be used from any number of threads at once.
pub struct HeatEncoderInstance {
    pub(crate) encoder: HeatEncoder,
}

impl HeatEncoderInstance {
    fn from_json(json: &str) -> Result<Box<Self>, DefaultHeatError> {
        let config = EncodingConfig::from_json(json)?;
        let encoder = HeatEncoder::new(config)?;
        Ok(Box::new(Self { encoder }))
    }
}

/// Write a freshly boxed instance (or null on error) to `out_instance`.
///
/// # Safety
/// `out_instance` must be a valid, non-null pointer to writable memory.
unsafe fn publish_instance(
    result: Result<Box<HeatEncoderInstance>, DefaultHeatError>,
    out_instance: *mut *mut HeatEncoderInstance,
) -> HeatErrorCode {
    match track_result(result) {
        Ok(instance) => {
            unsafe {
                *out_instance = Box::into_raw(instance);
            }
            HeatErrorCode::Ok
        }
        Err(code) => {
            unsafe {
                *out_instance = ptr::null_mut();
            }
            code
        }
    }
}

/// Create an encoder with the default configuration
/// (thermal ramp over 15-45 °C, SUHII 0-5, weights 0.3/0.7, alpha 180).
///
/// Returns
/// - `HeatErrorCode::Ok` (0): success, `out_instance` contains a valid pointer
/// - `HeatErrorCode::NullPointer`: `out_instance` is null
///
/// # Safety
///
/// - `out_instance` must be a valid, non-null pointer to writable memory.
/// - The caller takes ownership of the returned instance and MUST call
///   `heat_encoder_destroy` exactly once.
#[no_mangle]
pub unsafe extern "C" fn heat_encoder_new_default(
    out_instance: *mut *mut HeatEncoderInstance,
) -> HeatErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultHeatError::null_pointer("out_instance"));
    }

    let instance = Box::new(HeatEncoderInstance {
        encoder: HeatEncoder::default(),
    });
    unsafe { publish_instance(Ok(instance), out_instance) }
}

/// Create an encoder from a JSON configuration string.
///
/// Keys missing from the JSON keep their defaults.
///
/// Returns
/// - `HeatErrorCode::Ok` (0): success, `out_instance` contains a valid pointer
/// - `HeatErrorCode::NullPointer`: `json` or `out_instance` is null
/// - `HeatErrorCode::InvalidParameter`: `json` is not UTF-8
/// - `HeatErrorCode::InvalidConfig`: the JSON is malformed or describes an invalid configuration
///
/// On failure `out_instance` is set to null; call `heat_get_last_error()` for details.
///
/// # Safety
///
/// - `json` must be null or a valid null-terminated string.
/// - `out_instance` must be a valid, non-null pointer to writable memory.
/// - The caller takes ownership of the returned instance and MUST call
///   `heat_encoder_destroy` exactly once.
///
/// Example (C++)
/// ```cpp
/// HeatEncoderInstance* encoder = nullptr;
/// if (heat_encoder_new_from_json("{\"alpha\": 255}", &encoder) != HeatErrorCode::Ok) {
///     fprintf(stderr, "bad config: %s\n", heat_get_last_error());
///     return;
/// }
/// // ... use encoder ...
/// heat_encoder_destroy(encoder);
/// ```
#[no_mangle]
pub unsafe extern "C" fn heat_encoder_new_from_json(
    json: *const c_char,
    out_instance: *mut *mut HeatEncoderInstance,
) -> HeatErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultHeatError::null_pointer("out_instance"));
    }
    if json.is_null() {
        unsafe {
            *out_instance = ptr::null_mut();
        }
        return track_error(&DefaultHeatError::null_pointer("json"));
    }

    let result =
        unsafe { str_from_ptr(json, "json") }.and_then(HeatEncoderInstance::from_json);
    unsafe { publish_instance(result, out_instance) }
}

/// Destroy an encoder created by `heat_encoder_new_default` or
/// `heat_encoder_new_from_json`. Null is a no-op.
///
/// # Safety
/// - The pointer MUST have been created by one of the constructors above.
/// - The pointer MUST NOT have been freed already; do not use it afterwards.
#[no_mangle]
pub unsafe extern "C" fn heat_encoder_destroy(ptr: *mut HeatEncoderInstance) {
    if ptr.is_null() {
        return;
    }

    // SAFETY: the pointer came from `Box::into_raw` in `publish_instance`.
    unsafe {
        drop(Box::from_raw(ptr));
    }
}

/// Encode one sample.
///
/// Returns
/// - `HeatErrorCode::Ok` (0): success, `out_encoding` populated
/// - `HeatErrorCode::NullPointer`: `instance` or `out_encoding` is null
/// - `HeatErrorCode::NonFiniteInput`: value or secondary is NaN or infinite
/// - `HeatErrorCode::InvalidParameter`: `class_label` is not UTF-8
///
/// # Safety
/// - `instance` must be a live pointer from one of the constructors.
/// - `sample.class_label` must be null or a valid null-terminated string.
/// - `out_encoding` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn heat_encoder_encode(
    instance: *const HeatEncoderInstance,
    sample: HeatSampleInput,
    out_encoding: *mut HeatEncodingOutput,
) -> HeatErrorCode {
    if instance.is_null() {
        return track_error(&DefaultHeatError::null_pointer("instance"));
    }
    if out_encoding.is_null() {
        return track_error(&DefaultHeatError::null_pointer("out_encoding"));
    }

    let class_label = if sample.class_label.is_null() {
        None
    } else {
        match unsafe { str_from_ptr(sample.class_label, "class_label") } {
            Ok(label) => Some(label.to_owned()),
            Err(e) => return track_error(&e),
        }
    };
    let sample = HeatSample {
        value: sample.value,
        secondary: sample.has_secondary.then_some(sample.secondary),
        class_label,
    };

    // SAFETY: checked non-null above; caller guarantees it is live.
    let encoder = unsafe { &(*instance).encoder };
    match track_result(encoder.encode(&sample).map_err(DefaultHeatError::from)) {
        Ok(encoding) => {
            unsafe {
                *out_encoding = encoding.into();
            }
            HeatErrorCode::Ok
        }
        Err(code) => code,
    }
}
