//! Channel selector for indexing a [`Color`](super::Color)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// One of the four channels of a color.
///
/// Parses from `"r"`/`"red"`, `"g"`/`"green"`, `"b"`/`"blue"` and
/// `"a"`/`"alpha"` (case-insensitive).
///
/// # Example
///
/// ```
/// use tincture::{Channel, Color};
///
/// let mut color = Color::rgb(10, 20, 30);
/// color[Channel::G] = 99;
///
/// let blue: Channel = "Blue".parse().unwrap();
/// assert_eq!(color[blue], 30);
/// assert_eq!(color[Channel::G], 99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    R,
    G,
    B,
    A,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 4] = [Channel::R, Channel::G, Channel::B, Channel::A];

    /// Position of the channel in `[r, g, b, a]`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Channel at position `index` of `[r, g, b, a]`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::R => "red",
            Channel::G => "green",
            Channel::B => "blue",
            Channel::A => "alpha",
        };
        f.write_str(name)
    }
}

impl FromStr for Channel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "r" | "red" => Ok(Channel::R),
            "g" | "green" => Ok(Channel::G),
            "b" | "blue" => Ok(Channel::B),
            "a" | "alpha" => Ok(Channel::A),
            other => Err(ColorError::InvalidArgument(format!(
                "unknown channel '{other}'"
            ))),
        }
    }
}
