#![allow(clippy::excessive_precision, clippy::manual_range_contains)]

//! tincture-space: float color models for the tincture color engine
//!
//! Every model here works on `f64` components and is unclamped: the engine
//! quantizes back to 8-bit channels only at the very end of a computation.
//!
//! # Color Models
//!
//! - [`Rgb`]: gamma-encoded sRGB with components in `0.0..=1.0`
//! - [`LinearRgb`]: linear light, used for luminance and Oklab
//! - [`Hsv`] / [`Hsl`]: cylindrical models with hue in degrees
//! - [`Cmyk`]: subtractive model
//! - [`Oklab`] / [`Oklch`]: perceptual model and its polar form
//! - [`Xyz`]: CIE 1931 XYZ under D65
//!
//! # Example
//!
//! ```
//! use tincture_space::{Hsv, Rgb};
//!
//! let orange = Rgb::from_u8(255, 128, 0);
//! let hsv = Hsv::from(orange);
//! assert!((hsv.h - 30.1).abs() < 0.1);
//!
//! let back = Rgb::from(hsv);
//! assert_eq!(back.to_bytes(), [255, 128, 0]);
//! ```
//!
//! # Hue Convention
//!
//! Hues are degrees in `[0, 360)`. Achromatic colors (zero chroma) report a
//! hue of `0.0` rather than an undefined value. [`hue::lerp_hue`] walks the
//! shorter arc of the hue circle.

mod cmyk;
mod hsl;
mod hsv;
pub mod hue;
mod linear_rgb;
mod lut;
mod oklab;
mod rgb;
mod xyz;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use linear_rgb::LinearRgb;
pub use lut::{linear_to_srgb, srgb8_to_linear, srgb_to_linear};
pub use oklab::{Oklab, Oklch};
pub use rgb::Rgb;
pub use xyz::Xyz;
