//! HSV (hue, saturation, value) color model

use super::rgb::Rgb;

/// A color in the HSV cylinder.
///
/// # Components
///
/// - `h`: hue in degrees, `[0, 360)`; `0.0` for achromatic colors
/// - `s`: saturation, `0.0..=1.0`
/// - `v`: value (the largest RGB component), `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees
    pub h: f64,
    /// Saturation (0.0..=1.0)
    pub s: f64,
    /// Value (0.0..=1.0)
    pub v: f64,
}

impl Hsv {
    /// Create a new HSV color. The hue is wrapped into `[0, 360)`.
    #[inline]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: crate::hue::normalize_degrees(h),
            s,
            v,
        }
    }

    /// Rotate the hue by `degrees`, keeping saturation and value.
    #[inline]
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.v)
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        let (h, chroma) = rgb.hue_and_chroma();
        let v = rgb.max_component();
        let s = if v > 0.0 { chroma / v } else { 0.0 };
        Self { h, s, v }
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        let chroma = hsv.v * hsv.s;
        Rgb::from_hue_chroma(hsv.h, chroma, hsv.v - chroma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_hsv_matches_palette_crate() {
        use palette::{FromColor, Hsv as PaletteHsv, Srgb};

        let samples = [
            (255u8, 0u8, 0u8),
            (0, 255, 0),
            (0, 0, 255),
            (10, 20, 30),
            (92, 102, 31),
            (44, 33, 22),
            (92, 123, 34),
            (200, 200, 200),
        ];

        for (r, g, b) in samples {
            let ours = Hsv::from(Rgb::from_u8(r, g, b));
            let theirs: PaletteHsv<palette::encoding::Srgb, f64> =
                PaletteHsv::from_color(Srgb::new(r, g, b).into_format::<f64>());

            let their_hue = theirs.hue.into_positive_degrees();
            assert!(
                (ours.h - their_hue).abs() < 1e-6 || ours.s == 0.0,
                "hue mismatch for ({r}, {g}, {b}): ours={}, palette={their_hue}",
                ours.h
            );
            assert!((ours.s - theirs.saturation).abs() < 1e-6);
            assert!((ours.v - theirs.value).abs() < 1e-6);
        }
    }

    #[test]
    fn test_hsv_known_values() {
        let hsv = Hsv::from(Rgb::from_u8(10, 20, 30));
        assert!((hsv.h - 210.0).abs() < TOLERANCE);
        assert!((hsv.s - 2.0 / 3.0).abs() < TOLERANCE);
        assert!((hsv.v - 30.0 / 255.0).abs() < TOLERANCE);

        let black = Hsv::from(Rgb::from_u8(0, 0, 0));
        assert_eq!((black.h, black.s, black.v), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hsv_round_trip_every_hue_step() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(51) {
                    let back = Rgb::from(Hsv::from(Rgb::from_u8(r, g, b))).to_bytes();
                    assert_eq!(back, [r, g, b]);
                }
            }
        }
    }

    #[test]
    fn test_rotate_wraps() {
        let hsv = Hsv::new(350.0, 1.0, 1.0).rotate(20.0);
        assert!((hsv.h - 10.0).abs() < TOLERANCE);
        let hsv = Hsv::new(10.0, 1.0, 1.0).rotate(-360.0 * 1000.0);
        assert!((hsv.h - 10.0).abs() < 1e-6);
    }
}
