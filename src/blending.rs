//! Blending mode labels
//!
//! The engine does not composite. `BlendingMode` names the standard
//! compositing formulas so callers can carry the choice around, store it in
//! configuration and parse it from user input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// A compositing formula label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendingMode {
    Darken,
    Multiply,
    ColorBurn,
    LinearBurn,
    Lighten,
    Screen,
    ColorDodge,
    LinearDodge,
    Overlay,
    SoftLight,
    HardLight,
    VividLight,
    LinearLight,
    PinLight,
    Difference,
    Exclusion,
    Divide,
    Subtract,
    Luminosity,
    Average,
}

impl BlendingMode {
    /// Every mode, in declaration order.
    pub const ALL: [BlendingMode; 20] = [
        BlendingMode::Darken,
        BlendingMode::Multiply,
        BlendingMode::ColorBurn,
        BlendingMode::LinearBurn,
        BlendingMode::Lighten,
        BlendingMode::Screen,
        BlendingMode::ColorDodge,
        BlendingMode::LinearDodge,
        BlendingMode::Overlay,
        BlendingMode::SoftLight,
        BlendingMode::HardLight,
        BlendingMode::VividLight,
        BlendingMode::LinearLight,
        BlendingMode::PinLight,
        BlendingMode::Difference,
        BlendingMode::Exclusion,
        BlendingMode::Divide,
        BlendingMode::Subtract,
        BlendingMode::Luminosity,
        BlendingMode::Average,
    ];

    /// The snake_case name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            BlendingMode::Darken => "darken",
            BlendingMode::Multiply => "multiply",
            BlendingMode::ColorBurn => "color_burn",
            BlendingMode::LinearBurn => "linear_burn",
            BlendingMode::Lighten => "lighten",
            BlendingMode::Screen => "screen",
            BlendingMode::ColorDodge => "color_dodge",
            BlendingMode::LinearDodge => "linear_dodge",
            BlendingMode::Overlay => "overlay",
            BlendingMode::SoftLight => "soft_light",
            BlendingMode::HardLight => "hard_light",
            BlendingMode::VividLight => "vivid_light",
            BlendingMode::LinearLight => "linear_light",
            BlendingMode::PinLight => "pin_light",
            BlendingMode::Difference => "difference",
            BlendingMode::Exclusion => "exclusion",
            BlendingMode::Divide => "divide",
            BlendingMode::Subtract => "subtract",
            BlendingMode::Luminosity => "luminosity",
            BlendingMode::Average => "average",
        }
    }
}

impl fmt::Display for BlendingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlendingMode {
    type Err = ColorError;

    /// Accepts `color_burn`, `color-burn`, `ColorBurn` and any casing of them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect();

        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().replace('_', "").eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ColorError::InvalidArgument(format!("unknown blending mode '{s}'")))
    }
}
