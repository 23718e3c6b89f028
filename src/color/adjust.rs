//! Single-color adjustments: grayscale, brightness, contrast, hue and
//! temperature. Alpha is never touched here.

use tincture_space::{Hsl, Hsv, Rgb};

use super::{saturate_floor, saturate_round, AlphaPolicy, Color};

/// Rec. 601 luma weights
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

impl Color {
    /// Replace each RGB channel with the rounded Rec. 601 luma.
    ///
    /// # Example
    /// ```
    /// use tincture::Color;
    /// assert_eq!(Color::rgb(140, 92, 210).grayscale(), Color::rgb(120, 120, 120));
    /// ```
    pub fn grayscale(self) -> Color {
        let luma = saturate_round(
            LUMA_R * f64::from(self.r) + LUMA_G * f64::from(self.g) + LUMA_B * f64::from(self.b),
        );
        Color::new(luma, luma, luma, self.a)
    }

    /// Scale RGB by `1 + k` for `k >= 0`, or by `1 / (1 + |k|)` for `k < 0`.
    ///
    /// # Example
    /// ```
    /// use tincture::Color;
    ///
    /// let color = Color::new(10, 5, 20, 12);
    /// assert_eq!(color.brightness(2.0), Color::new(30, 15, 60, 12));
    /// assert_eq!(color.brightness(-1.0), Color::new(5, 2, 10, 12));
    /// assert_eq!(color.brightness(0.0), color);
    /// ```
    pub fn brightness(self, k: f64) -> Color {
        let factor = if k >= 0.0 { 1.0 + k } else { 1.0 / (1.0 + k.abs()) };
        self.map_channels(AlphaPolicy::Preserve, |x| saturate_floor(f64::from(x) * factor))
    }

    /// Stretch RGB away from mid-grey: `127.5 + (c - 127.5)(1 + k)`.
    ///
    /// `k = -1` flattens every channel to 127.
    pub fn contrast(self, k: f64) -> Color {
        let factor = 1.0 + k;
        self.map_channels(AlphaPolicy::Preserve, |x| {
            saturate_floor(127.5 + (f64::from(x) - 127.5) * factor)
        })
    }

    pub fn contrast_inplace(&mut self, k: f64) {
        *self = self.contrast(k);
    }

    /// Warm (positive) or cool (negative) the color.
    ///
    /// `t` is clamped to `[-255, 255]`; red gains `t` and blue loses it.
    pub fn adjust_temperature(self, t: i64) -> Color {
        let t = t.clamp(-255, 255);
        let shift = |x: u8, by: i64| (i64::from(x) + by).clamp(0, 255) as u8;
        Color::new(shift(self.r, t), self.g, shift(self.b, -t), self.a)
    }

    pub fn adjust_temperature_inplace(&mut self, t: i64) {
        *self = self.adjust_temperature(t);
    }

    /// Rotate the HSV hue by `degrees`, keeping saturation, value and alpha.
    ///
    /// Any magnitude is accepted; the rotation wraps modulo 360.
    ///
    /// # Example
    /// ```
    /// use tincture::Color;
    ///
    /// let red = Color::rgb(255, 0, 0);
    /// assert_eq!(red.tint(120), Color::rgb(0, 255, 0));
    /// assert_eq!(red.tint(360_000_000), red);
    /// ```
    pub fn tint(self, degrees: i64) -> Color {
        // Reduce in integers so huge rotations stay exact
        let degrees = degrees.rem_euclid(360) as f64;
        let rotated = Hsv::from(self.to_space_rgb()).rotate(degrees);
        Color::from_space_rgb(Rgb::from(rotated), self.a)
    }

    /// Scale the HSV saturation by `1 + k`, clamped to `[0, 1]`.
    pub fn saturate(self, k: f64) -> Color {
        let mut hsv = Hsv::from(self.to_space_rgb());
        hsv.s = (hsv.s * (1.0 + k)).clamp(0.0, 1.0);
        Color::from_space_rgb(Rgb::from(hsv), self.a)
    }

    /// The two colors whose HSL hues sit 120° either side of this one.
    ///
    /// Returned as `[+120°, -120°]`.
    pub fn triadic_colors(self) -> [Color; 2] {
        let hsl = Hsl::from(self.to_space_rgb());
        [120.0, -120.0].map(|shift| Color::from_space_rgb(Rgb::from(hsl.rotate(shift)), self.a))
    }
}
