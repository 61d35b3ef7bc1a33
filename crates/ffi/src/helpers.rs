use crate::error::{with_last_error_mut, DefaultHeatError, HeatError, HeatErrorCode};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Set the thread-local error message and code.
/// Internal helper for FFI functions to record failure details.
/// Accepts any type implementing `HeatError` trait.
pub(crate) fn set_last_error(error: &impl HeatError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl HeatError) -> HeatErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the error of a failed result, or clear the last error on success.
#[inline]
pub(crate) fn track_result<T>(result: Result<T, DefaultHeatError>) -> Result<T, HeatErrorCode> {
    match result {
        Ok(value) => {
            clear_last_error();
            Ok(value)
        }
        Err(error) => Err(track_error(&error)),
    }
}

/// Clear the thread-local error message and code.
/// Internal helper called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = HeatErrorCode::Ok;
    });
}

/// Borrow a C string as UTF-8.
///
/// # Safety
/// `ptr` must be non-null and point to a null-terminated string that stays
/// valid for the returned lifetime.
pub(crate) unsafe fn str_from_ptr<'a>(
    ptr: *const c_char,
    param_name: &str,
) -> Result<&'a str, DefaultHeatError> {
    // SAFETY: caller guarantees a valid null-terminated string.
    let cstr = unsafe { CStr::from_ptr(ptr) };
    cstr.to_str().map_err(|e| {
        DefaultHeatError::invalid_parameter(format!("Parameter '{param_name}' is not UTF-8: {e}"))
    })
}
