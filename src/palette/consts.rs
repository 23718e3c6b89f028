//! Named color constants
//!
//! All constants are fully opaque.

use crate::Color;

// Primaries and secondaries
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const CYAN: Color = Color::rgb(0, 255, 255);
pub const MAGENTA: Color = Color::rgb(255, 0, 255);
pub const PINK: Color = Color::rgb(255, 0, 125);
pub const PURPLE: Color = Color::rgb(125, 0, 255);
pub const ORANGE: Color = Color::rgb(255, 125, 0);
pub const LIME: Color = Color::rgb(125, 255, 0);
pub const TEAL: Color = Color::rgb(0, 255, 125);
pub const VIVID_BLUE: Color = Color::rgb(0, 125, 255);

// Light variants
pub const LIGHT_RED: Color = Color::rgb(255, 125, 125);
pub const LIGHT_GREEN: Color = Color::rgb(125, 255, 125);
pub const LIGHT_BLUE: Color = Color::rgb(125, 125, 255);
pub const LIGHT_CYAN: Color = Color::rgb(125, 255, 255);
pub const LIGHT_MAGENTA: Color = Color::rgb(255, 125, 255);
pub const LIGHT_YELLOW: Color = Color::rgb(255, 255, 125);
pub const LIGHT_PURPLE: Color = Color::rgb(203, 195, 227);
pub const LIGHT_LIME: Color = Color::rgb(174, 253, 108);
pub const LIGHT_ORANGE: Color = Color::rgb(255, 213, 128);
pub const LIGHT_TEAL: Color = Color::rgb(144, 228, 193);
pub const LIGHT_PINK: Color = Color::rgb(255, 182, 193);

// Dark variants
pub const DARK_RED: Color = Color::rgb(125, 62, 62);
pub const DARK_BLUE: Color = Color::rgb(62, 62, 125);
pub const DARK_GREEN: Color = Color::rgb(62, 125, 62);
pub const DARK_YELLOW: Color = Color::rgb(125, 125, 62);
pub const DARK_CYAN: Color = Color::rgb(62, 125, 125);
pub const DARK_MAGENTA: Color = Color::rgb(125, 62, 125);
pub const DARK_ORANGE: Color = Color::rgb(125, 93, 62);
pub const DARK_PINK: Color = Color::rgb(125, 62, 93);
pub const DARK_PURPLE: Color = Color::rgb(93, 62, 125);
pub const DARK_LIME: Color = Color::rgb(93, 125, 62);
pub const DARK_TEAL: Color = Color::rgb(62, 125, 93);

/// Every constant with its lowercase name, in declaration order.
pub const ALL: [(&str, Color); 36] = [
    ("white", WHITE),
    ("black", BLACK),
    ("red", RED),
    ("blue", BLUE),
    ("green", GREEN),
    ("yellow", YELLOW),
    ("cyan", CYAN),
    ("magenta", MAGENTA),
    ("pink", PINK),
    ("purple", PURPLE),
    ("orange", ORANGE),
    ("lime", LIME),
    ("teal", TEAL),
    ("vivid_blue", VIVID_BLUE),
    ("light_red", LIGHT_RED),
    ("light_green", LIGHT_GREEN),
    ("light_blue", LIGHT_BLUE),
    ("light_cyan", LIGHT_CYAN),
    ("light_magenta", LIGHT_MAGENTA),
    ("light_yellow", LIGHT_YELLOW),
    ("light_purple", LIGHT_PURPLE),
    ("light_lime", LIGHT_LIME),
    ("light_orange", LIGHT_ORANGE),
    ("light_teal", LIGHT_TEAL),
    ("light_pink", LIGHT_PINK),
    ("dark_red", DARK_RED),
    ("dark_blue", DARK_BLUE),
    ("dark_green", DARK_GREEN),
    ("dark_yellow", DARK_YELLOW),
    ("dark_cyan", DARK_CYAN),
    ("dark_magenta", DARK_MAGENTA),
    ("dark_orange", DARK_ORANGE),
    ("dark_pink", DARK_PINK),
    ("dark_purple", DARK_PURPLE),
    ("dark_lime", DARK_LIME),
    ("dark_teal", DARK_TEAL),
];
