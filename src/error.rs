use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used by every fallible color operation.
pub type Result<T, E = ColorError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed bounds: {0}")]
    MalformedBounds(String),

    #[error("Color parse error: {0}")]
    Parse(#[from] ParseColorError),
}

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    #[error("Invalid hex color length (expected 3, 6 or 8 digits)")]
    InvalidLength,

    #[error("Invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Failed to read palette file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Palette YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid color '{value}' for palette entry '{name}': {source}")]
    InvalidColor {
        name: String,
        value: String,
        #[source]
        source: ParseColorError,
    },
}
