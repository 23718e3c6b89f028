//! HSL (hue, saturation, lightness) color model

use super::rgb::Rgb;

/// A color in the HSL double cone.
///
/// Shares its hue convention with [`Hsv`](crate::Hsv): degrees in
/// `[0, 360)`, `0.0` for achromatic colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation (0.0..=1.0)
    pub s: f64,
    /// Lightness (0.0..=1.0)
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color. The hue is wrapped into `[0, 360)`.
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: crate::hue::normalize_degrees(h),
            s,
            l,
        }
    }

    /// Rotate the hue by `degrees`, keeping saturation and lightness.
    #[inline]
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let (h, chroma) = rgb.hue_and_chroma();
        let l = (rgb.max_component() + rgb.min_component()) / 2.0;
        let denominator = 1.0 - (2.0 * l - 1.0).abs();
        let s = if chroma > 0.0 && denominator > 0.0 {
            (chroma / denominator).min(1.0)
        } else {
            0.0
        };
        Self { h, s, l }
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        let chroma = (1.0 - (2.0 * hsl.l - 1.0).abs()) * hsl.s;
        Rgb::from_hue_chroma(hsl.h, chroma, hsl.l - chroma / 2.0)
    }
}
