//! Name-to-color lookup table and the process-wide palette

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

use super::consts;
use crate::error::PaletteError;
use crate::Color;

/// Environment variable naming a YAML file that extends the named palette.
pub const PALETTE_ENV: &str = "TINCTURE_PALETTE";

/// On-disk palette override file.
///
/// ```yaml
/// colors:
///   brand_blue: "#1e90ff"
///   overlay: "#00000080"
/// ```
#[derive(Debug, Deserialize, Default)]
pub(crate) struct PaletteFile {
    #[serde(default)]
    colors: BTreeMap<String, String>,
}

/// Ordered map from lowercase name to color.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    colors: BTreeMap<String, Color>,
}

impl Palette {
    /// An empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in constants from [`consts`](super::consts).
    pub fn builtin() -> Self {
        let mut palette = Self::new();
        for (name, color) in consts::ALL {
            palette.insert(name, color);
        }
        palette
    }

    /// Look up a color by name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.colors.get(&normalize(name)).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entries sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.colors.iter().map(|(name, color)| (name.as_str(), *color))
    }

    /// Add or replace an entry. Returns the color previously stored under `name`.
    pub fn insert(&mut self, name: &str, color: Color) -> Option<Color> {
        self.colors.insert(normalize(name), color)
    }

    /// Copy every entry of `other` into `self`, replacing on name clashes.
    pub fn merge(&mut self, other: Palette) {
        self.colors.extend(other.colors);
    }

    /// Parse a palette from YAML with a top-level `colors` map of name to
    /// hex string.
    ///
    /// # Example
    /// ```
    /// use tincture::{Color, Palette};
    ///
    /// let palette = Palette::from_yaml_str("colors:\n  Brand: \"#1e90ff\"\n").unwrap();
    /// assert_eq!(palette.get("brand"), Some(Color::rgb(30, 144, 255)));
    /// ```
    pub fn from_yaml_str(content: &str) -> Result<Self, PaletteError> {
        let file: PaletteFile = serde_yaml::from_str(content)?;
        let mut palette = Self::new();
        for (name, value) in file.colors {
            let color = value
                .parse::<Color>()
                .map_err(|source| PaletteError::InvalidColor {
                    name: name.clone(),
                    value: value.clone(),
                    source,
                })?;
            palette.insert(&name, color);
        }
        Ok(palette)
    }

    /// Read and parse a palette file.
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Built-in colors overlaid with the file at `path`, if any.
    ///
    /// A file that cannot be read or parsed is logged and skipped; the
    /// built-in colors are always available.
    pub fn load(path: Option<&Path>) -> Self {
        let mut palette = Self::builtin();
        let Some(path) = path else {
            return palette;
        };

        match Self::from_file(path) {
            Ok(overrides) => {
                tracing::info!(
                    path = %path.display(),
                    colors = overrides.len(),
                    "Loaded palette overrides"
                );
                palette.merge(overrides);
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load palette, using built-in colors");
            }
        }
        palette
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

static NAMED: OnceLock<Palette> = OnceLock::new();

/// The process-wide named palette.
///
/// Built on first access from the built-in constants plus the file named
/// by `TINCTURE_PALETTE`, then read-only.
///
/// # Example
/// ```
/// use tincture::palette::{self, consts};
///
/// assert_eq!(palette::named().get("vivid_blue"), Some(consts::VIVID_BLUE));
/// ```
pub fn named() -> &'static Palette {
    NAMED.get_or_init(|| {
        let path = std::env::var_os(PALETTE_ENV).map(PathBuf::from);
        let palette = Palette::load(path.as_deref());
        tracing::debug!(colors = palette.len(), "Initialised named palette");
        palette
    })
}
