//! Tincture - fixed-point RGBA color values
//!
//! A [`Color`] is four saturating 8-bit channels. The crate provides:
//!
//! - channel arithmetic that clamps instead of wrapping, with a per-call
//!   [`AlphaPolicy`] deciding whether alpha takes part
//! - conversions to and from HSV, HSL, CMYK, Oklab, Oklch and CIE XYZ
//! - linear (`mlerp`) and hue-aware cylindrical (`clerp`) interpolation
//! - luminance, saturation and approximate equality
//! - a named palette, extensible from a YAML file
//!
//! # Example
//!
//! ```
//! use tincture::{AlphaPolicy, Color};
//!
//! let sky = Color::rgb(66, 135, 245);
//! let dusk = sky.tint(40).brightness(-0.5);
//!
//! assert_eq!(dusk.a, 255);
//! assert!(dusk.get_luminance() < sky.get_luminance());
//!
//! // Operators include alpha; methods take an explicit policy
//! let glass = Color::new(255, 255, 255, 128);
//! assert_eq!((glass + glass).a, 255);
//! assert_eq!(glass.add(glass, AlphaPolicy::Preserve).a, 128);
//! ```
//!
//! # Rounding
//!
//! Scaling (`mul`, `div`, `brightness`, `contrast`) truncates. Roots,
//! grayscale, interpolation and color-space round trips round to nearest.

pub mod blending;
pub mod color;
pub mod error;
pub mod palette;


pub use blending::BlendingMode;
pub use color::{AlphaPolicy, Channel, Color, Operand};
pub use error::{ColorError, PaletteError, ParseColorError, Result};
pub use palette::Palette;
