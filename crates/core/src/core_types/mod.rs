//! Core types and utilities

pub mod color;
pub mod sample;
pub mod units;

pub use color::{opacity_to_alpha, Rgb, Rgba};
pub use sample::HeatSample;
pub use units::*;
