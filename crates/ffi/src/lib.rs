//! C ABI for the heat visual encoding library.
//!
//! Every fallible function returns a `HeatErrorCode` (0 = success) and writes
//! its result through an out-pointer. On failure the message is kept in
//! thread-local storage and can be read with `heat_get_last_error()`.

mod encoder;
mod error;
mod functions;
mod helpers;
mod types;

pub use encoder::{
    heat_encoder_destroy, heat_encoder_encode, heat_encoder_new_default,
    heat_encoder_new_from_json, HeatEncoderInstance,
};
pub use error::{heat_get_last_error, heat_get_last_error_code, HeatErrorCode};
pub use functions::{
    heat_blend, heat_class_color, heat_color_for, heat_elevation_for, heat_normalize,
};
pub use types::{HeatColor, HeatEncodingOutput, HeatSampleInput};
