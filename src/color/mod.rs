//! The `Color` value type
//!
//! A `Color` is four `u8` channels of non-premultiplied RGBA. Every
//! operation saturates into `0..=255` instead of wrapping, so a `Color` is
//! always valid by construction.
//!
//! The operation set is split by concern:
//!
//! - `arith`: saturating channel arithmetic and the operator impls
//! - `adjust`: grayscale, brightness, contrast, tint and friends
//! - `convert`: HSV, HSL, CMYK, Oklab conversions and derived metrics
//! - `interpolate`: `mlerp` and `clerp`
//! - `random`: bounded randomisation

mod adjust;
mod alpha;
mod arith;
mod channel;
mod convert;
mod interpolate;
mod random;

use std::fmt;
use std::ops::{Index, IndexMut, Shl, Shr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseColorError;

pub use alpha::AlphaPolicy;
pub use arith::Operand;
pub use channel::Channel;

/// An 8-bit-per-channel RGBA color.
///
/// Channels are straight (non-premultiplied) alpha. Alpha `255` is fully
/// opaque; alpha `0` is fully transparent, which is also what makes a
/// color "falsy" (see [`Color::is_truthy`]).
///
/// `Color` is `Copy`. Value-returning operations leave the receiver alone;
/// the `*_inplace` variants and the compound assignment operators update it
/// and always produce the same numbers as their value-returning twins.
///
/// # Example
///
/// ```
/// use tincture::{AlphaPolicy, Color};
///
/// let teal = Color::rgb(0, 128, 128);
/// let brighter = teal.add(Color::rgb(40, 40, 40), AlphaPolicy::Preserve);
///
/// assert_eq!(brighter, Color::rgb(40, 168, 168));
/// assert_eq!(teal, Color::rgb(0, 128, 128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    u8::MAX
}

impl Color {
    /// Create a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from wide integers, clamping each into `0..=255`.
    ///
    /// This is the constructor for values that come out of unchecked
    /// arithmetic; the channel setters never see an out-of-range value.
    ///
    /// # Example
    /// ```
    /// use tincture::Color;
    /// assert_eq!(Color::saturating(-20, 300, 128, 255), Color::rgb(0, 255, 128));
    /// ```
    #[inline]
    pub fn saturating(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            a: clamp_channel(a),
        }
    }

    /// Independent copy with identical channels.
    #[inline]
    pub fn copy(&self) -> Self {
        *self
    }

    /// Channel at position `index` of `[r, g, b, a]`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        Channel::from_index(index).map(|channel| self[channel])
    }

    /// Whether every compared channel of `self` is within `tolerance` of
    /// `other` (inclusive). Alpha is only compared under
    /// [`AlphaPolicy::Include`].
    ///
    /// # Example
    /// ```
    /// use tincture::{AlphaPolicy, Color};
    ///
    /// let a = Color::new(3, 2, 1, 255);
    /// let b = Color::new(4, 5, 6, 0);
    /// assert!(a.approx_equal(b, 5, AlphaPolicy::Preserve));
    /// assert!(!a.approx_equal(b, 5, AlphaPolicy::Include));
    /// ```
    pub fn approx_equal(&self, other: Color, tolerance: u8, alpha: AlphaPolicy) -> bool {
        let within = |x: u8, y: u8| x.abs_diff(y) <= tolerance;
        within(self.r, other.r)
            && within(self.g, other.g)
            && within(self.b, other.b)
            && (!alpha.includes_alpha() || within(self.a, other.a))
    }

    /// A color is falsy only when it is fully transparent.
    ///
    /// Opaque black is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        self.a != 0
    }

    /// Whether alpha is exactly `0`.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        !self.is_truthy()
    }

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channels as `(r, g, b, a)`.
    #[inline]
    pub fn to_rgba_tuple(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Lowercase hex: `#rrggbb`, or `#rrggbbaa` under [`AlphaPolicy::Include`].
    ///
    /// # Example
    /// ```
    /// use tincture::{AlphaPolicy, Color};
    /// let color = Color::new(1, 171, 255, 8);
    /// assert_eq!(color.to_hex(AlphaPolicy::Preserve), "#01abff");
    /// assert_eq!(color.to_hex(AlphaPolicy::Include), "#01abff08");
    /// ```
    pub fn to_hex(&self, alpha: AlphaPolicy) -> String {
        let rgb = format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
        if alpha.includes_alpha() {
            format!("{rgb}{:02x}", self.a)
        } else {
            rgb
        }
    }

    /// Rotate `[r, g, b, a]` right by `places` (left when negative).
    ///
    /// # Example
    /// ```
    /// use tincture::Color;
    /// let color = Color::new(1, 2, 3, 4);
    /// assert_eq!(color.rotate_channels(1), Color::new(4, 1, 2, 3));
    /// assert_eq!(color.rotate_channels(-1), Color::new(2, 3, 4, 1));
    /// assert_eq!(color.rotate_channels(8), color);
    /// ```
    pub fn rotate_channels(&self, places: i64) -> Self {
        let mut channels = self.to_rgba();
        channels.rotate_right(places.rem_euclid(4) as usize);
        Self::from(channels)
    }
}

#[inline]
pub(crate) fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Truncate a float channel result and saturate it into `0..=255`.
///
/// NaN lands on `0`.
#[inline]
pub(crate) fn saturate_floor(value: f64) -> u8 {
    value.floor().clamp(0.0, 255.0) as u8
}

/// Round a float channel result to nearest and saturate it into `0..=255`.
#[inline]
pub(crate) fn saturate_round(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} : {} : {} : {})", self.r, self.g, self.b, self.a)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_rgba()
    }
}

impl From<Color> for bool {
    fn from(color: Color) -> Self {
        color.is_truthy()
    }
}

impl Index<Channel> for Color {
    type Output = u8;

    fn index(&self, channel: Channel) -> &u8 {
        match channel {
            Channel::R => &self.r,
            Channel::G => &self.g,
            Channel::B => &self.b,
            Channel::A => &self.a,
        }
    }
}

impl IndexMut<Channel> for Color {
    fn index_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::R => &mut self.r,
            Channel::G => &mut self.g,
            Channel::B => &mut self.b,
            Channel::A => &mut self.a,
        }
    }
}

impl Shr<i64> for Color {
    type Output = Color;

    fn shr(self, places: i64) -> Color {
        self.rotate_channels(places)
    }
}

impl Shl<i64> for Color {
    type Output = Color;

    fn shl(self, places: i64) -> Color {
        self.rotate_channels(places.wrapping_neg())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a hex color string.
    ///
    /// Supports `#RGB`, `#RRGGBB` and `#RRGGBBAA`, each with or without the
    /// leading `#`. Parsing is case-insensitive and trims whitespace.
    ///
    /// # Example
    /// ```
    /// use tincture::Color;
    ///
    /// let red: Color = "#F00".parse().unwrap();
    /// assert_eq!(red, Color::rgb(255, 0, 0));
    ///
    /// let glass: Color = "ffffff80".parse().unwrap();
    /// assert_eq!(glass, Color::new(255, 255, 255, 128));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: each digit doubles (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::rgb(r, g, b))
            }
            6 | 8 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                let a = if s.len() == 8 {
                    u8::from_str_radix(&s[6..8], 16)?
                } else {
                    255
                };
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
