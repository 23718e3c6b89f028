//! Linear RGB color type
//!
//! Linear RGB is proportional to emitted light. Luminance and the Oklab
//! transform are only defined on linear values.

use super::lut::{linear_to_srgb, srgb_to_linear};
use super::rgb::Rgb;

/// Rec. 709 / sRGB luminance coefficients.
const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// A color in linear RGB.
///
/// Values are typically in `0.0..=1.0` but are not clamped, since Oklab
/// round trips can land slightly outside the gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Decode 8-bit sRGB channels through the lookup table.
    ///
    /// Equivalent to `LinearRgb::from(Rgb::from_u8(r, g, b))` but exact and
    /// cheaper.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: crate::srgb8_to_linear(r),
            g: crate::srgb8_to_linear(g),
            b: crate::srgb8_to_linear(b),
        }
    }

    /// WCAG relative luminance, `0.0` (black) to `1.0` (white).
    ///
    /// # Example
    /// ```
    /// use tincture_space::LinearRgb;
    /// let green = LinearRgb::from_u8(50, 168, 82);
    /// assert!((green.relative_luminance() - 0.293).abs() < 0.005);
    /// ```
    #[inline]
    pub fn relative_luminance(self) -> f64 {
        LUMINANCE_WEIGHTS[0] * self.r
            + LUMINANCE_WEIGHTS[1] * self.g
            + LUMINANCE_WEIGHTS[2] * self.b
    }
}

impl From<Rgb> for LinearRgb {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb_to_linear(rgb.r),
            g: srgb_to_linear(rgb.g),
            b: srgb_to_linear(rgb.b),
        }
    }
}

impl From<LinearRgb> for Rgb {
    fn from(linear: LinearRgb) -> Self {
        Rgb::new(
            linear_to_srgb(linear.r),
            linear_to_srgb(linear.g),
            linear_to_srgb(linear.b),
        )
    }
}
