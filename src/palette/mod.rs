//! Named colors
//!
//! [`consts`] holds the built-in colors as `const` values. [`named()`]
//! exposes them by name, extended by an optional YAML file:
//!
//! ```yaml
//! colors:
//!   brand_blue: "#1e90ff"
//!   overlay: "#00000080"
//! ```
//!
//! Point `TINCTURE_PALETTE` at the file before first use of [`named()`].
//! Entries in the file replace built-in colors of the same name.

pub mod consts;
mod named;

pub use named::{named, Palette, PALETTE_ENV};
