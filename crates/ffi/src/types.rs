use heat_encoding_core::{HeatEncoding, Rgb, Rgba};
use std::os::raw::c_char;

/// RGBA color with 8-bit channels.
/// Keep this layout stable for C/C++/C# consumers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeatColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 0 = transparent, 255 = opaque
    pub a: u8,
}

impl From<Rgba> for HeatColor {
    fn from(color: Rgba) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

impl From<Rgb> for HeatColor {
    fn from(color: Rgb) -> Self {
        color.with_alpha(u8::MAX).into()
    }
}

/// One observation passed in from C.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct HeatSampleInput {
    /// Surface temperature (°C) or generic metric.
    pub value: f64,

    /// Whether `secondary` carries a value.
    pub has_secondary: bool,

    /// Secondary signal such as SUHII. Ignored unless `has_secondary`.
    pub secondary: f64,

    /// Optional null-terminated land-use label; null means no label.
    pub class_label: *const c_char,
}

/// Visual encoding of one sample.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct HeatEncodingOutput {
    /// Fill color from the blended intensity.
    pub fill: HeatColor,

    /// Extrusion height.
    pub elevation: f64,

    /// Blended intensity in [0, 1].
    pub intensity: f64,

    /// Whether `class_color` is set (the sample had a label).
    pub has_class_color: bool,

    /// Land-use color (opaque). Zeroed unless `has_class_color`.
    pub class_color: HeatColor,
}

impl From<HeatEncoding> for HeatEncodingOutput {
    fn from(encoding: HeatEncoding) -> Self {
        Self {
            fill: encoding.fill.into(),
            elevation: encoding.elevation,
            intensity: encoding.intensity.value(),
            has_class_color: encoding.class_color.is_some(),
            class_color: encoding.class_color.map(HeatColor::from).unwrap_or_default(),
        }
    }
}
