//! Per-call alpha participation policy

use serde::{Deserialize, Serialize};

/// Whether an operation touches the alpha channel.
///
/// Binary operations take the alpha of their *first* operand under
/// [`AlphaPolicy::Preserve`]. Under [`AlphaPolicy::Include`] alpha goes
/// through the same formula as the color channels.
///
/// # Example
///
/// ```
/// use tincture::{AlphaPolicy, Color};
///
/// let base = Color::new(10, 20, 30, 100);
/// let other = Color::new(1, 1, 1, 50);
///
/// assert_eq!(base.add(other, AlphaPolicy::Preserve).a, 100);
/// assert_eq!(base.add(other, AlphaPolicy::Include).a, 150);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaPolicy {
    /// Alpha of the first operand passes through unchanged
    #[default]
    Preserve,
    /// Alpha takes part in the operation
    Include,
}

impl AlphaPolicy {
    #[inline]
    pub fn includes_alpha(self) -> bool {
        matches!(self, AlphaPolicy::Include)
    }
}

impl From<bool> for AlphaPolicy {
    /// `true` maps to [`AlphaPolicy::Include`].
    fn from(include: bool) -> Self {
        if include {
            AlphaPolicy::Include
        } else {
            AlphaPolicy::Preserve
        }
    }
}
