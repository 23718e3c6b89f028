//! Saturating channel arithmetic
//!
//! Every result is clamped into `0..=255`. Float scaling truncates toward
//! negative infinity before clamping; `base_sqrt` rounds.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{clamp_channel, saturate_floor, saturate_round, AlphaPolicy, Color};
use crate::error::{ColorError, Result};

/// Right-hand side of [`Color::add`] and [`Color::sub`].
///
/// A scalar applies the same amount to every participating channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Color(Color),
    Scalar(i64),
}

impl From<Color> for Operand {
    fn from(color: Color) -> Self {
        Operand::Color(color)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(value.into())
    }
}

impl From<u8> for Operand {
    fn from(value: u8) -> Self {
        Operand::Scalar(value.into())
    }
}

#[inline]
fn clamp_wide(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

impl Color {
    /// Apply `f` to each RGB channel, and to alpha under `Include`.
    #[inline]
    pub(super) fn map_channels(self, alpha: AlphaPolicy, f: impl Fn(u8) -> u8) -> Color {
        Color {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
            a: if alpha.includes_alpha() { f(self.a) } else { self.a },
        }
    }

    /// Combine channel pairs with `f`. Under `Preserve` alpha comes from `self`.
    #[inline]
    pub(super) fn zip_channels(
        self,
        other: Color,
        alpha: AlphaPolicy,
        f: impl Fn(u8, u8) -> u8,
    ) -> Color {
        Color {
            r: f(self.r, other.r),
            g: f(self.g, other.g),
            b: f(self.b, other.b),
            a: if alpha.includes_alpha() {
                f(self.a, other.a)
            } else {
                self.a
            },
        }
    }

    fn combine(self, other: Operand, alpha: AlphaPolicy, f: impl Fn(i64, i64) -> i64) -> Color {
        match other {
            Operand::Color(rhs) => {
                self.zip_channels(rhs, alpha, |x, y| clamp_wide(f(x.into(), y.into())))
            }
            Operand::Scalar(k) => self.map_channels(alpha, |x| clamp_wide(f(x.into(), k))),
        }
    }

    /// Per-channel sum, saturating at 255.
    ///
    /// # Example
    /// ```
    /// use tincture::{AlphaPolicy, Color};
    ///
    /// let sum = Color::rgb(1, 2, 3).add(Color::new(3, 2, 1, 0), AlphaPolicy::Include);
    /// assert_eq!(sum, Color::rgb(4, 4, 4));
    ///
    /// let lifted = Color::rgb(250, 10, 0).add(10, AlphaPolicy::Preserve);
    /// assert_eq!(lifted, Color::rgb(255, 20, 10));
    /// ```
    pub fn add(self, other: impl Into<Operand>, alpha: AlphaPolicy) -> Color {
        self.combine(other.into(), alpha, i64::saturating_add)
    }

    /// Per-channel difference, saturating at 0.
    pub fn sub(self, other: impl Into<Operand>, alpha: AlphaPolicy) -> Color {
        self.combine(other.into(), alpha, i64::saturating_sub)
    }

    /// Scale every channel by `k`, truncating.
    ///
    /// Huge factors saturate to 255; zero, negative or NaN factors give 0.
    pub fn mul(self, k: f64, alpha: AlphaPolicy) -> Color {
        self.map_channels(alpha, |x| saturate_floor(f64::from(x) * k))
    }

    /// Divide every channel by `k`.
    ///
    /// Quotients are truncated toward zero, not rounded, so a half never
    /// rounds up: `(10, 21, 32, 255) / 2` is `(5, 10, 16, 127)`.
    ///
    /// # Example
    /// ```
    /// use tincture::{AlphaPolicy, Color};
    ///
    /// let half = Color::rgb(10, 21, 32).div(2.0, AlphaPolicy::Include).unwrap();
    /// assert_eq!(half, Color::new(5, 10, 16, 127));
    /// ```
    ///
    /// # Errors
    ///
    /// [`ColorError::DivisionByZero`] when `k == 0`.
    pub fn div(self, k: f64, alpha: AlphaPolicy) -> Result<Color> {
        if k == 0.0 {
            tracing::debug!(divisor = k, "Rejected division by zero");
            return Err(ColorError::DivisionByZero);
        }
        Ok(self.map_channels(alpha, |x| saturate_floor(f64::from(x) / k)))
    }

    /// Integer-quotient division; same result as [`Color::div`] for the same divisor.
    pub fn div_int(self, k: i64, alpha: AlphaPolicy) -> Result<Color> {
        if k == 0 {
            tracing::debug!(divisor = k, "Rejected division by zero");
            return Err(ColorError::DivisionByZero);
        }
        Ok(self.map_channels(alpha, |x| clamp_wide(i64::from(x) / k)))
    }

    /// Per-channel product of the raw channel values, saturated.
    ///
    /// # Example
    /// ```
    /// use tincture::{AlphaPolicy, Color};
    ///
    /// let product = Color::rgb(10, 21, 32).tensor(Color::new(2, 5, 3, 1), AlphaPolicy::Include);
    /// assert_eq!(product, Color::rgb(20, 105, 96));
    /// ```
    pub fn tensor(self, other: Color, alpha: AlphaPolicy) -> Color {
        self.zip_channels(other, alpha, |x, y| {
            clamp_channel(i32::from(x) * i32::from(y))
        })
    }

    /// Per-channel `round(channel^(1/n))`.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidArgument`] unless `n > 1`.
    pub fn base_sqrt(self, n: f64, alpha: AlphaPolicy) -> Result<Color> {
        // NaN fails the comparison too
        if !(n > 1.0) {
            tracing::debug!(root = n, "Rejected root");
            return Err(ColorError::InvalidArgument(format!(
                "root must be greater than 1, got {n}"
            )));
        }
        let exponent = n.recip();
        Ok(self.map_channels(alpha, |x| saturate_round(f64::from(x).powf(exponent))))
    }

    /// Per-channel maximum.
    pub fn max(self, other: Color, alpha: AlphaPolicy) -> Color {
        self.zip_channels(other, alpha, u8::max)
    }

    /// Per-channel minimum.
    pub fn min(self, other: Color, alpha: AlphaPolicy) -> Color {
        self.zip_channels(other, alpha, u8::min)
    }

    /// `255 - channel`.
    ///
    /// # Example
    /// ```
    /// use tincture::{AlphaPolicy, Color};
    ///
    /// let color = Color::new(0, 100, 255, 50);
    /// assert_eq!(color.inverse(AlphaPolicy::Include), Color::new(255, 155, 0, 205));
    /// assert_eq!(-color, Color::new(255, 155, 0, 205));
    /// ```
    pub fn inverse(self, alpha: AlphaPolicy) -> Color {
        self.map_channels(alpha, |x| u8::MAX - x)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::add(self, rhs, AlphaPolicy::Include)
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color::sub(self, rhs, AlphaPolicy::Include)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl SubAssign for Color {
    fn sub_assign(&mut self, rhs: Color) {
        *self = *self - rhs;
    }
}

macro_rules! scalar_ops {
    ($($ty:ty),*) => {$(
        impl Add<$ty> for Color {
            type Output = Color;

            fn add(self, rhs: $ty) -> Color {
                Color::add(self, rhs, AlphaPolicy::Include)
            }
        }

        impl Sub<$ty> for Color {
            type Output = Color;

            fn sub(self, rhs: $ty) -> Color {
                Color::sub(self, rhs, AlphaPolicy::Include)
            }
        }

        impl AddAssign<$ty> for Color {
            fn add_assign(&mut self, rhs: $ty) {
                *self = *self + rhs;
            }
        }

        impl SubAssign<$ty> for Color {
            fn sub_assign(&mut self, rhs: $ty) {
                *self = *self - rhs;
            }
        }
    )*};
}

scalar_ops!(i32, i64);

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, k: f64) -> Color {
        Color::mul(self, k, AlphaPolicy::Include)
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        self.tensor(rhs, AlphaPolicy::Include)
    }
}

impl MulAssign<f64> for Color {
    fn mul_assign(&mut self, k: f64) {
        *self = *self * k;
    }
}

impl MulAssign for Color {
    fn mul_assign(&mut self, rhs: Color) {
        *self = *self * rhs;
    }
}

impl Neg for Color {
    type Output = Color;

    fn neg(self) -> Color {
        self.inverse(AlphaPolicy::Include)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INCLUDE: AlphaPolicy = AlphaPolicy::Include;
    const PRESERVE: AlphaPolicy = AlphaPolicy::Preserve;

    #[test]
    fn test_add_saturates() {
        assert_eq!(
            Color::rgb(1, 2, 3).add(Color::new(3, 2, 1, 0), INCLUDE),
            Color::rgb(4, 4, 4)
        );
        assert_eq!(
            Color::rgb(200, 200, 200).add(Color::rgb(100, 0, 55), PRESERVE),
            Color::rgb(255, 200, 255)
        );
        assert_eq!(Color::new(0, 0, 0, 0).add(i64::MAX, INCLUDE), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_add_preserve_keeps_first_alpha() {
        let sum = Color::new(10, 10, 10, 7).add(Color::new(1, 1, 1, 200), PRESERVE);
        assert_eq!(sum, Color::new(11, 11, 11, 7));
    }

    #[test]
    fn test_sub_saturates() {
        assert_eq!(
            Color::rgb(255, 255, 255).sub(Color::rgb(255, 255, 255), INCLUDE),
            Color::new(0, 0, 0, 0)
        );
        assert_eq!(
            Color::rgb(10, 20, 30).sub(Color::rgb(20, 20, 20), PRESERVE),
            Color::rgb(0, 0, 10)
        );
        assert_eq!(Color::rgb(10, 20, 30).sub(-5, PRESERVE), Color::rgb(15, 25, 35));
    }

    #[test]
    fn test_mul() {
        assert_eq!(Color::rgb(255, 0, 255).mul(0.0, INCLUDE), Color::new(0, 0, 0, 0));
        assert_eq!(Color::rgb(1, 1, 1).mul(9e20, PRESERVE), Color::rgb(255, 255, 255));
        assert_eq!(Color::rgb(255, 255, 255).mul(1e-10, PRESERVE), Color::rgb(0, 0, 0));
        assert_eq!(Color::rgb(10, 21, 33).mul(1.5, PRESERVE), Color::rgb(15, 31, 49));
        assert_eq!(Color::rgb(10, 20, 30).mul(-2.0, PRESERVE), Color::rgb(0, 0, 0));
        assert_eq!(Color::rgb(10, 20, 30).mul(f64::NAN, PRESERVE), Color::rgb(0, 0, 0));
    }

    #[test]
    fn test_div() {
        assert_eq!(
            Color::new(12, 90, 50, 30).div(0.5, INCLUDE).unwrap(),
            Color::new(24, 180, 100, 60)
        );
        assert_eq!(
            Color::rgb(255, 255, 255).div(255.0, PRESERVE).unwrap(),
            Color::rgb(1, 1, 1)
        );
        assert_eq!(
            Color::rgb(10, 21, 32).div(2.0, INCLUDE).unwrap(),
            Color::new(5, 10, 16, 127)
        );
    }

    #[test]
    fn test_div_truncates_instead_of_rounding() {
        // 21 / 2 = 10.5 and 255 / 2 = 127.5 both stay down
        assert_eq!(
            Color::new(21, 21, 21, 255).div(2.0, INCLUDE).unwrap(),
            Color::new(10, 10, 10, 127)
        );
        // 2 / 3 = 0.67 truncates to 0
        assert_eq!(
            Color::new(2, 8, 11, 3).div(3.0, INCLUDE).unwrap(),
            Color::new(0, 2, 3, 1)
        );
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(
            Color::new(255, 20, 40, 1).div(0.0, INCLUDE),
            Err(ColorError::DivisionByZero)
        );
        assert_eq!(
            Color::new(255, 20, 40, 1).div_int(0, PRESERVE),
            Err(ColorError::DivisionByZero)
        );
    }

    #[test]
    fn test_div_int_matches_div() {
        let color = Color::new(255, 77, 3, 128);
        for k in [1i64, 2, 3, 7, 255, 1000, -4] {
            assert_eq!(
                color.div_int(k, INCLUDE).unwrap(),
                color.div(k as f64, INCLUDE).unwrap(),
                "divisor {k}"
            );
        }
    }

    #[test]
    fn test_tensor() {
        assert_eq!(
            Color::rgb(10, 21, 32).tensor(Color::new(2, 5, 3, 1), INCLUDE),
            Color::rgb(20, 105, 96)
        );
        assert_eq!(
            Color::rgb(100, 2, 0).tensor(Color::rgb(3, 100, 9), PRESERVE),
            Color::rgb(255, 200, 0)
        );
        assert_eq!(Color::rgb(10, 21, 32) * Color::new(2, 5, 3, 1), Color::rgb(20, 105, 96));
    }

    #[test]
    fn test_base_sqrt() {
        assert_eq!(
            Color::rgb(16, 64, 9).base_sqrt(2.0, PRESERVE).unwrap(),
            Color::rgb(4, 8, 3)
        );
        assert_eq!(
            Color::new(16, 64, 9, 255).base_sqrt(2.0, INCLUDE).unwrap(),
            Color::new(4, 8, 3, 16)
        );
        assert_eq!(
            Color::new(27, 8, 0, 1).base_sqrt(3.0, INCLUDE).unwrap(),
            Color::new(3, 2, 0, 1)
        );
    }

    #[test]
    fn test_base_sqrt_rejects_small_roots() {
        let white = Color::rgb(255, 255, 255);
        for root in [1.0, 0.0, 0.5, -2.0, f64::NAN] {
            assert!(
                matches!(white.base_sqrt(root, PRESERVE), Err(ColorError::InvalidArgument(_))),
                "root {root} should be rejected"
            );
        }
    }

    #[test]
    fn test_max_min() {
        let a = Color::new(10, 200, 30, 40);
        let b = Color::new(100, 20, 30, 4);
        assert_eq!(a.max(b, INCLUDE), Color::new(100, 200, 30, 40));
        assert_eq!(a.min(b, INCLUDE), Color::new(10, 20, 30, 4));
        assert_eq!(b.max(a, PRESERVE), Color::new(100, 200, 30, 4));
    }

    #[test]
    fn test_inverse() {
        assert_eq!(Color::rgb(16, 64, 9).inverse(INCLUDE), Color::new(239, 191, 246, 0));
        assert_eq!(Color::rgb(16, 64, 9).inverse(PRESERVE), Color::rgb(239, 191, 246));
        let color = Color::new(3, 2, 1, 0);
        assert_eq!(-(-color), color);
    }

    #[test]
    fn test_operators_include_alpha() {
        let a = Color::new(10, 20, 30, 40);
        let b = Color::new(1, 2, 3, 4);
        assert_eq!(a + b, Color::new(11, 22, 33, 44));
        assert_eq!(a - b, Color::new(9, 18, 27, 36));
        assert_eq!(a + 5, Color::new(15, 25, 35, 45));
        assert_eq!(a - 50i64, Color::new(0, 0, 0, 0));
        assert_eq!(a * 2.0, Color::new(20, 40, 60, 80));
    }

    #[test]
    fn test_compound_assignment_matches_operators() {
        let a = Color::new(10, 20, 30, 40);
        let b = Color::new(1, 2, 3, 4);

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);

        let mut c = a;
        c -= 7;
        assert_eq!(c, a - 7);

        let mut c = a;
        c *= 0.5;
        assert_eq!(c, a * 0.5);

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }
}
