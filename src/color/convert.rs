//! Color-space conversions and derived metrics
//!
//! The float math lives in `tincture-space`; this module only moves between
//! 8-bit channels and the decimal models, and validates fractional input.

use tincture_space::{Cmyk, Hsl, Hsv, LinearRgb, Oklab, Oklch, Rgb, Xyz};

use super::Color;
use crate::error::{ColorError, Result};

fn unit(name: &str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        tracing::debug!(component = name, value, "Rejected fractional component");
        Err(ColorError::InvalidArgument(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}

fn finite_hue(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColorError::InvalidArgument(format!(
            "hue must be finite, got {value}"
        )))
    }
}

/// Upper bounds of `[X, Y, Z]` on the 0..100 scale: the D65 white.
const XYZ_MAX: [f64; 3] = [95.047, 100.0, 108.883];

#[inline]
fn alpha_byte(alpha: f64) -> u8 {
    (alpha * 255.0).round() as u8
}

impl Color {
    /// The decimal sRGB triple, without alpha.
    #[inline]
    pub(crate) fn to_space_rgb(self) -> Rgb {
        Rgb::from_u8(self.r, self.g, self.b)
    }

    /// Quantize a decimal sRGB triple, attaching `a`.
    #[inline]
    pub(crate) fn from_space_rgb(rgb: Rgb, a: u8) -> Color {
        let [r, g, b] = rgb.to_bytes();
        Color::new(r, g, b, a)
    }

    #[inline]
    fn alpha_fraction(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Every channel divided by 255.
    pub fn to_decimal_rgba(self) -> [f64; 4] {
        let Rgb { r, g, b } = self.to_space_rgb();
        [r, g, b, self.alpha_fraction()]
    }

    /// `[c, m, y, k, alpha]`, all in `[0, 1]`.
    ///
    /// Black is `[0, 0, 0, 1, alpha]`.
    ///
    /// # Example
    /// ```
    /// use tincture::Color;
    ///
    /// let [c, m, y, k, _] = Color::rgb(10, 20, 30).to_cmyk();
    /// assert!((c - 0.67).abs() < 0.01);
    /// assert!((m - 0.33).abs() < 0.01);
    /// assert_eq!(y, 0.0);
    /// assert!((k - 0.88).abs() < 0.01);
    /// ```
    pub fn to_cmyk(self) -> [f64; 5] {
        let Cmyk { c, m, y, k } = Cmyk::from(self.to_space_rgb());
        [c, m, y, k, self.alpha_fraction()]
    }

    /// `[hue°, saturation, value, alpha]`. Achromatic colors report hue 0.
    pub fn to_hsv(self) -> [f64; 4] {
        let Hsv { h, s, v } = Hsv::from(self.to_space_rgb());
        [h, s, v, self.alpha_fraction()]
    }

    /// `[hue°, saturation, lightness, alpha]`.
    pub fn to_hsl(self) -> [f64; 4] {
        let Hsl { h, s, l } = Hsl::from(self.to_space_rgb());
        [h, s, l, self.alpha_fraction()]
    }

    /// `[L, a, b, alpha]` in Oklab.
    pub fn to_oklab(self) -> [f64; 4] {
        let Oklab { l, a, b } = Oklab::from(LinearRgb::from_u8(self.r, self.g, self.b));
        [l, a, b, self.alpha_fraction()]
    }

    /// `[L, chroma, hue°, alpha]` in Oklch.
    pub fn to_oklch(self) -> [f64; 4] {
        let lab = Oklab::from(LinearRgb::from_u8(self.r, self.g, self.b));
        let Oklch { l, c, h } = Oklch::from(lab);
        [l, c, h, self.alpha_fraction()]
    }

    /// `[X, Y, Z, alpha]` in CIE XYZ (D65), with white at `Y = 100`.
    ///
    /// Each component is clamped to the range [`Color::from_xyz`] accepts,
    /// so the result always converts back.
    ///
    /// # Example
    /// ```
    /// use tincture::Color;
    ///
    /// let [x, y, z, _] = Color::rgb(255, 255, 255).to_xyz();
    /// assert!((x - 95.047).abs() < 0.01);
    /// assert!((y - 100.0).abs() < 0.01);
    /// assert!((z - 108.883).abs() < 0.01);
    /// ```
    pub fn to_xyz(self) -> [f64; 4] {
        let xyz = Xyz::from(LinearRgb::from_u8(self.r, self.g, self.b));
        let scaled = [xyz.x, xyz.y, xyz.z].map(|v| v * 100.0);
        [
            scaled[0].clamp(0.0, XYZ_MAX[0]),
            scaled[1].clamp(0.0, XYZ_MAX[1]),
            scaled[2].clamp(0.0, XYZ_MAX[2]),
            self.alpha_fraction(),
        ]
    }

    /// WCAG 2 relative luminance in `[0, 1]`.
    ///
    /// # Example
    /// ```
    /// use tincture::Color;
    /// assert!((Color::rgb(255, 255, 255).get_luminance() - 1.0).abs() < 1e-9);
    /// assert!((Color::rgb(50, 168, 82).get_luminance() - 0.292).abs() < 0.005);
    /// ```
    pub fn get_luminance(self) -> f64 {
        LinearRgb::from_u8(self.r, self.g, self.b)
            .relative_luminance()
            .clamp(0.0, 1.0)
    }

    /// HSV saturation.
    pub fn get_saturation(self) -> f64 {
        Hsv::from(self.to_space_rgb()).s
    }

    /// Build a color from `[0, 1]` fractions.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidArgument`] if any component is outside `[0, 1]`.
    pub fn from_decimal_rgba(r: f64, g: f64, b: f64, alpha: f64) -> Result<Color> {
        let rgb = Rgb::new(unit("red", r)?, unit("green", g)?, unit("blue", b)?);
        Ok(Color::from_space_rgb(rgb, alpha_byte(unit("alpha", alpha)?)))
    }

    /// Build a color from HSV. The hue is in degrees and wraps.
    ///
    /// # Example
    /// ```
    /// use tincture::Color;
    /// let color = Color::from_hsv(-240.0, 1.0, 1.0, 1.0).unwrap();
    /// assert_eq!(color, Color::rgb(0, 255, 0));
    /// ```
    pub fn from_hsv(h: f64, s: f64, v: f64, alpha: f64) -> Result<Color> {
        let hsv = Hsv::new(finite_hue(h)?, unit("saturation", s)?, unit("value", v)?);
        Ok(Color::from_space_rgb(
            Rgb::from(hsv),
            alpha_byte(unit("alpha", alpha)?),
        ))
    }

    /// Build a color from HSL. The hue is in degrees and wraps.
    pub fn from_hsl(h: f64, s: f64, l: f64, alpha: f64) -> Result<Color> {
        let hsl = Hsl::new(finite_hue(h)?, unit("saturation", s)?, unit("lightness", l)?);
        Ok(Color::from_space_rgb(
            Rgb::from(hsl),
            alpha_byte(unit("alpha", alpha)?),
        ))
    }

    /// Build a color from CMYK fractions.
    pub fn from_cmyk(c: f64, m: f64, y: f64, k: f64, alpha: f64) -> Result<Color> {
        let cmyk = Cmyk::new(
            unit("cyan", c)?,
            unit("magenta", m)?,
            unit("yellow", y)?,
            unit("key", k)?,
        );
        Ok(Color::from_space_rgb(
            Rgb::from(cmyk),
            alpha_byte(unit("alpha", alpha)?),
        ))
    }

    /// Build a color from Oklab. Out-of-gamut values are clipped per channel.
    pub fn from_oklab(l: f64, a: f64, b: f64, alpha: f64) -> Result<Color> {
        if !(l.is_finite() && a.is_finite() && b.is_finite()) {
            return Err(ColorError::InvalidArgument(format!(
                "Oklab components must be finite, got ({l}, {a}, {b})"
            )));
        }
        let rgb = Rgb::from(LinearRgb::from(Oklab::new(l, a, b)));
        Ok(Color::from_space_rgb(rgb, alpha_byte(unit("alpha", alpha)?)))
    }

    /// Build a color from Oklch. The hue is in degrees and wraps.
    /// Out-of-gamut values are clipped per channel.
    ///
    /// # Example
    /// ```
    /// use tincture::Color;
    ///
    /// let [l, c, h, a] = Color::rgb(200, 40, 90).to_oklch();
    /// assert_eq!(Color::from_oklch(l, c, h + 360.0, a).unwrap(), Color::rgb(200, 40, 90));
    /// ```
    pub fn from_oklch(l: f64, c: f64, h: f64, alpha: f64) -> Result<Color> {
        if !(l.is_finite() && c.is_finite() && h.is_finite()) {
            return Err(ColorError::InvalidArgument(format!(
                "Oklch components must be finite, got ({l}, {c}, {h})"
            )));
        }
        let lab = Oklab::from(Oklch::new(l, c, h));
        let rgb = Rgb::from(LinearRgb::from(lab));
        Ok(Color::from_space_rgb(rgb, alpha_byte(unit("alpha", alpha)?)))
    }

    /// Build a color from CIE XYZ (D65) with white at `Y = 100`.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidArgument`] unless `x` is within `[0, 95.047]`,
    /// `y` within `[0, 100]`, `z` within `[0, 108.883]` and `alpha` within
    /// `[0, 1]`.
    pub fn from_xyz(x: f64, y: f64, z: f64, alpha: f64) -> Result<Color> {
        let components = [("X", x, XYZ_MAX[0]), ("Y", y, XYZ_MAX[1]), ("Z", z, XYZ_MAX[2])];
        for (name, value, max) in components {
            if !(0.0..=max).contains(&value) {
                tracing::debug!(component = name, value, "Rejected XYZ component");
                return Err(ColorError::InvalidArgument(format!(
                    "{name} must be within [0, {max}], got {value}"
                )));
            }
        }
        let linear = LinearRgb::from(Xyz::new(x / 100.0, y / 100.0, z / 100.0));
        Ok(Color::from_space_rgb(
            Rgb::from(linear),
            alpha_byte(unit("alpha", alpha)?),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(actual: f64, expected: f64, tolerance: f64) -> bool {
        (actual - expected).abs() <= tolerance
    }

    #[test]
    fn test_decimal_rgba() {
        assert_eq!(Color::new(255, 0, 51, 0).to_decimal_rgba(), [1.0, 0.0, 0.2, 0.0]);
        assert_eq!(
            Color::from_decimal_rgba(1.0, 0.0, 0.2, 0.0).unwrap(),
            Color::new(255, 0, 51, 0)
        );
    }

    #[test]
    fn test_hsv_of_dark_blue() {
        let [h, s, v, a] = Color::new(10, 20, 30, 40).to_hsv();
        assert!(close(h, 210.0, 1e-9));
        assert!(close(s, 0.67, 0.01));
        assert!(close(v, 0.12, 0.01));
        assert!(close(a, 0.157, 0.001));
    }

    #[test]
    fn test_hsl_of_dark_blue() {
        let [h, s, l, _] = Color::rgb(10, 20, 30).to_hsl();
        assert!(close(h, 210.0, 1e-9));
        assert!(close(s, 0.5, 1e-9));
        assert!(close(l, 0.08, 0.01));
    }

    #[test]
    fn test_cmyk_of_black() {
        assert_eq!(Color::new(0, 0, 0, 255).to_cmyk(), [0.0, 0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_round_trips_within_two() {
        for color in [
            Color::new(92, 123, 34, 239),
            Color::new(1, 2, 3, 4),
            Color::new(255, 254, 0, 128),
            Color::new(200, 17, 90, 0),
        ] {
            let [h, s, v, a] = color.to_hsv();
            let hsv = Color::from_hsv(h, s, v, a).unwrap();
            let [h, s, l, a] = color.to_hsl();
            let hsl = Color::from_hsl(h, s, l, a).unwrap();
            let [c, m, y, k, a] = color.to_cmyk();
            let cmyk = Color::from_cmyk(c, m, y, k, a).unwrap();

            for back in [hsv, hsl, cmyk] {
                assert!(
                    color.approx_equal(back, 2, crate::AlphaPolicy::Include),
                    "{color} came back as {back}"
                );
            }
        }
    }

    #[test]
    fn test_oklab_round_trip() {
        let color = Color::new(92, 123, 34, 200);
        let [l, a, b, alpha] = color.to_oklab();
        let back = Color::from_oklab(l, a, b, alpha).unwrap();
        assert!(color.approx_equal(back, 1, crate::AlphaPolicy::Include));

        let [l, c, _, _] = Color::rgb(255, 255, 255).to_oklch();
        assert!(close(l, 1.0, 1e-4));
        assert!(c < 1e-4);
    }

    #[test]
    fn test_oklch_round_trip() {
        for color in [
            Color::new(92, 123, 34, 200),
            Color::new(200, 40, 90, 255),
            Color::new(128, 128, 128, 0),
            Color::new(0, 0, 255, 17),
        ] {
            let [l, c, h, alpha] = color.to_oklch();
            let back = Color::from_oklch(l, c, h, alpha).unwrap();
            assert!(
                color.approx_equal(back, 1, crate::AlphaPolicy::Include),
                "{color} came back as {back}"
            );
        }
    }

    #[test]
    fn test_from_oklch_rejects_bad_input() {
        assert!(matches!(
            Color::from_oklch(0.5, f64::INFINITY, 0.0, 1.0),
            Err(ColorError::InvalidArgument(_))
        ));
        assert!(matches!(
            Color::from_oklch(0.5, 0.1, f64::NAN, 1.0),
            Err(ColorError::InvalidArgument(_))
        ));
        assert!(matches!(
            Color::from_oklch(0.5, 0.1, 30.0, 1.2),
            Err(ColorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_xyz_of_white_and_black() {
        let [x, y, z, a] = Color::rgb(255, 255, 255).to_xyz();
        assert!(close(x, 95.047, 0.01));
        assert!(close(y, 100.0, 0.01));
        assert!(close(z, 108.883, 0.01));
        assert_eq!(a, 1.0);
        assert_eq!(Color::new(0, 0, 0, 0).to_xyz(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_xyz_round_trip() {
        for color in [
            Color::new(255, 255, 255, 255),
            Color::new(92, 123, 34, 239),
            Color::new(255, 0, 0, 128),
            Color::new(0, 0, 255, 0),
            Color::new(1, 2, 3, 4),
        ] {
            let [x, y, z, alpha] = color.to_xyz();
            let back = Color::from_xyz(x, y, z, alpha).unwrap();
            assert!(
                color.approx_equal(back, 1, crate::AlphaPolicy::Include),
                "{color} came back as {back}"
            );
        }
    }

    #[test]
    fn test_from_xyz_rejects_out_of_range() {
        for (x, y, z) in [
            (95.1, 50.0, 50.0),
            (50.0, 100.5, 50.0),
            (50.0, 50.0, -0.1),
            (f64::NAN, 0.0, 0.0),
        ] {
            assert!(
                matches!(
                    Color::from_xyz(x, y, z, 1.0),
                    Err(ColorError::InvalidArgument(_))
                ),
                "({x}, {y}, {z}) was accepted"
            );
        }
        assert!(matches!(
            Color::from_xyz(95.047, 100.0, 108.883, 1.5),
            Err(ColorError::InvalidArgument(_))
        ));
        assert_eq!(
            Color::from_xyz(95.047, 100.0, 108.883, 1.0).unwrap(),
            Color::rgb(255, 255, 255)
        );
    }

    #[test]
    fn test_metrics() {
        assert!(close(Color::rgb(50, 168, 82).get_luminance(), 0.292, 0.005));
        assert_eq!(Color::rgb(0, 0, 0).get_luminance(), 0.0);
        assert!(close(Color::rgb(106, 240, 117).get_saturation(), 0.55, 0.01));
        assert!(close(Color::rgb(45, 30, 250).get_saturation(), 0.88, 0.01));
        assert_eq!(Color::rgb(128, 128, 128).get_saturation(), 0.0);
    }

    #[test]
    fn test_constructors_reject_out_of_range_fractions() {
        assert!(matches!(
            Color::from_decimal_rgba(1.5, 0.0, 0.0, 1.0),
            Err(ColorError::InvalidArgument(_))
        ));
        assert!(matches!(
            Color::from_hsv(0.0, -0.1, 1.0, 1.0),
            Err(ColorError::InvalidArgument(_))
        ));
        assert!(matches!(
            Color::from_hsl(f64::NAN, 0.5, 0.5, 1.0),
            Err(ColorError::InvalidArgument(_))
        ));
        assert!(matches!(
            Color::from_cmyk(0.0, 0.0, 0.0, 0.0, f64::NAN),
            Err(ColorError::InvalidArgument(_))
        ));
    }
}
