//! CMYK subtractive color model

use super::rgb::Rgb;

/// A color in naive (device-independent) CMYK.
///
/// `k` is derived from the brightest RGB component; pure black has
/// `c = m = y = 0` and `k = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    /// Cyan (0.0..=1.0)
    pub c: f64,
    /// Magenta (0.0..=1.0)
    pub m: f64,
    /// Yellow (0.0..=1.0)
    pub y: f64,
    /// Key / black (0.0..=1.0)
    pub k: f64,
}

impl Cmyk {
    #[inline]
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }
}

impl From<Rgb> for Cmyk {
    fn from(rgb: Rgb) -> Self {
        let k = 1.0 - rgb.max_component();
        if k >= 1.0 {
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }
        let scale = 1.0 - k;
        Self {
            c: (1.0 - rgb.r - k) / scale,
            m: (1.0 - rgb.g - k) / scale,
            y: (1.0 - rgb.b - k) / scale,
            k,
        }
    }
}

impl From<Cmyk> for Rgb {
    fn from(cmyk: Cmyk) -> Self {
        let scale = 1.0 - cmyk.k;
        Rgb::new(
            (1.0 - cmyk.c) * scale,
            (1.0 - cmyk.m) * scale,
            (1.0 - cmyk.y) * scale,
        )
    }
}
