//! Interpolation between two colors
//!
//! `mlerp` blends channels on the number line. `clerp` blends in HSV and
//! walks the hue along the shorter arc of the circle.

use tincture_space::{hue, Hsv, Rgb};

use super::{saturate_round, AlphaPolicy, Color};
use crate::error::{ColorError, Result};

fn check_t(t: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&t) {
        Ok(t)
    } else {
        tracing::debug!(t, "Rejected interpolation parameter");
        Err(ColorError::InvalidArgument(format!(
            "interpolation parameter must be within [0, 1], got {t}"
        )))
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

impl Color {
    /// Channel-wise linear interpolation, alpha included.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidArgument`] if `t` is outside `[0, 1]` or NaN.
    ///
    /// # Example
    /// ```
    /// use tincture::Color;
    ///
    /// let red = Color::rgb(255, 0, 0);
    /// let blue = Color::rgb(0, 0, 255);
    /// assert_eq!(red.mlerp(blue, 0.4).unwrap(), Color::rgb(153, 0, 102));
    /// assert!(red.mlerp(blue, 1.5).is_err());
    /// ```
    pub fn mlerp(self, other: Color, t: f64) -> Result<Color> {
        let t = check_t(t)?;
        Ok(self.zip_channels(other, AlphaPolicy::Include, |x, y| {
            saturate_round(lerp(f64::from(x), f64::from(y), t))
        }))
    }

    /// In-place [`Color::mlerp`]. The receiver is left untouched on error.
    pub fn mlerp_inplace(&mut self, other: Color, t: f64) -> Result<()> {
        *self = self.mlerp(other, t)?;
        Ok(())
    }

    /// Cylindrical interpolation through HSV.
    ///
    /// Hue follows the shorter arc. An achromatic endpoint (zero
    /// saturation) takes the other endpoint's hue, so blending towards grey
    /// only desaturates. Alpha is interpolated linearly.
    ///
    /// # Example
    /// ```
    /// use tincture::Color;
    ///
    /// // Red to magenta crosses 330 degrees, not cyan
    /// let red = Color::rgb(255, 0, 0);
    /// let magenta = Color::rgb(255, 0, 255);
    /// assert_eq!(red.clerp(magenta, 0.5).unwrap(), Color::rgb(255, 0, 128));
    /// ```
    pub fn clerp(self, other: Color, t: f64) -> Result<Color> {
        let t = check_t(t)?;
        let from = Hsv::from(self.to_space_rgb());
        let to = Hsv::from(other.to_space_rgb());

        let (from_hue, to_hue) = match (from.s > 0.0, to.s > 0.0) {
            (false, true) => (to.h, to.h),
            (true, false) => (from.h, from.h),
            _ => (from.h, to.h),
        };

        let blended = Hsv::new(
            hue::lerp_hue(from_hue, to_hue, t),
            lerp(from.s, to.s, t),
            lerp(from.v, to.v, t),
        );
        let alpha = saturate_round(lerp(f64::from(self.a), f64::from(other.a), t));
        Ok(Color::from_space_rgb(Rgb::from(blended), alpha))
    }

    /// In-place [`Color::clerp`]. The receiver is left untouched on error.
    pub fn clerp_inplace(&mut self, other: Color, t: f64) -> Result<()> {
        *self = self.clerp(other, t)?;
        Ok(())
    }
}
