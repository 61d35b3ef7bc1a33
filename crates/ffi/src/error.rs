use heat_encoding_core::EncodingError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across the FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait HeatError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> HeatErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `HeatError` for FFI error scenarios.
///
/// Wraps a `HeatErrorCode` with a message. Core `EncodingError`s convert
/// into this type so their message survives the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultHeatError {
    code: HeatErrorCode,
    msg: String,
}

impl DefaultHeatError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_instance"`, `"json"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: HeatErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for an invalid parameter.
    ///
    /// # Arguments
    /// * `message` - Description of the error
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: HeatErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl HeatError for DefaultHeatError {
    fn code(&self) -> HeatErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

impl From<EncodingError> for DefaultHeatError {
    fn from(error: EncodingError) -> Self {
        let code = match error {
            EncodingError::DegenerateDomain { .. } => HeatErrorCode::DegenerateDomain,
            EncodingError::NonFiniteInput { .. } => HeatErrorCode::NonFiniteInput,
            EncodingError::InvalidBands(_)
            | EncodingError::InvalidWeights { .. }
            | EncodingError::InvalidElevationScale(_)
            | EncodingError::InvalidHexColor(_)
            | EncodingError::ConfigParse(_)
            | EncodingError::ConfigIo(_) => HeatErrorCode::InvalidConfig,
            EncodingError::FractionOutOfRange(_)
            | EncodingError::TimeStepOutOfRange { .. }
            | EncodingError::EmptySeries => HeatErrorCode::InvalidParameter,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

/// FFI error codes returned by heat encoding functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Domain bounds do not satisfy `min < max`.
    DegenerateDomain = 2,

    /// A numeric input was NaN or infinite.
    NonFiniteInput = 3,

    /// Encoder configuration could not be parsed or failed validation.
    InvalidConfig = 4,

    /// Invalid parameter passed to function (e.g. a string that is not UTF-8).
    InvalidParameter = 5,
}

impl From<DefaultHeatError> for HeatErrorCode {
    fn from(error: DefaultHeatError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is owned here so pointers handed out by `heat_get_last_error`
    /// stay valid until the next call on this thread.
    static LAST_ERROR: RefCell<(Option<CString>, HeatErrorCode)> = const { RefCell::new((None, HeatErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, HeatErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, HeatErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or the message cannot be converted to a C string.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each thread has its own independent error state.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// double t = 0.0;
/// HeatErrorCode err = heat_normalize(value, 30.0, 30.0, &t);
/// if (err != HeatErrorCode::Ok) {
///     const char* error = heat_get_last_error();
///     if (error) {
///         printf("normalize failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn heat_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns:
/// - `HeatErrorCode::Ok` (0) if the last call on this thread succeeded
/// - The specific error code from the last failed operation
#[no_mangle]
pub extern "C" fn heat_get_last_error_code() -> HeatErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
