//! Decimal sRGB color type
//!
//! The gamma-encoded sRGB triple every other model converts through.

/// A gamma-encoded sRGB color with components in `0.0..=1.0`.
///
/// This is the decimal form of an 8-bit color: `255` maps to `1.0`.
/// Values are not clamped, so a conversion that lands slightly outside the
/// unit range is only clamped when quantized with [`Rgb::to_bytes`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel (0.0..=1.0)
    pub r: f64,
    /// Green channel (0.0..=1.0)
    pub g: f64,
    /// Blue channel (0.0..=1.0)
    pub b: f64,
}

impl Rgb {
    /// Create a new color from decimal components.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use tincture_space::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Quantize to a byte array `[R, G, B]`.
    ///
    /// Rounds to nearest and clamps to `0..=255`.
    ///
    /// # Example
    /// ```
    /// use tincture_space::Rgb;
    /// let color = Rgb::new(1.2, 0.5, -0.1);
    /// assert_eq!(color.to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Largest of the three components.
    #[inline]
    pub fn max_component(self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest of the three components.
    #[inline]
    pub fn min_component(self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    /// Hue in degrees `[0, 360)` and chroma (`max - min`).
    ///
    /// Shared by the HSV and HSL conversions. Achromatic colors return a
    /// hue of `0.0`.
    pub(crate) fn hue_and_chroma(self) -> (f64, f64) {
        let max = self.max_component();
        let delta = max - self.min_component();
        if delta <= 0.0 {
            return (0.0, 0.0);
        }

        let sector = if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };

        (crate::hue::normalize_degrees(sector * 60.0), delta)
    }

    /// Build a color from hue, chroma and the lightness offset `m` that is
    /// added to every component.
    pub(crate) fn from_hue_chroma(hue: f64, chroma: f64, m: f64) -> Self {
        let h = crate::hue::normalize_degrees(hue) / 60.0;
        let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Self::new(r + m, g + m, b + m)
    }
}

#[inline]
fn quantize(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
