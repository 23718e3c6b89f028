//! Bounded random colors

use rand::Rng;

use super::{Channel, Color};
use crate::error::{ColorError, Result};

fn check_arity(name: &str, bounds: &[Option<u8>]) -> Result<()> {
    if bounds.len() == 4 {
        Ok(())
    } else {
        Err(ColorError::MalformedBounds(format!(
            "{name} bound has {} entries, expected 4",
            bounds.len()
        )))
    }
}

impl Color {
    /// A random color with each channel drawn uniformly from
    /// `[low[i], high[i]]`, using the thread-local RNG.
    ///
    /// See [`Color::randomise_with`] for the bound rules.
    pub fn randomise(low: &[Option<u8>], high: &[Option<u8>]) -> Result<Color> {
        Self::randomise_with(&mut rand::thread_rng(), low, high)
    }

    /// A random color drawn from `rng`.
    ///
    /// Each bound slice holds exactly four entries. A `None` low bound means
    /// `0` and a `None` high bound means `255`.
    ///
    /// When both slices set bounds, at least one channel must be set in both.
    /// Bounds that only ever touch disjoint channels (say a low alpha and a
    /// high red) are treated as misaligned rather than silently paired with
    /// defaults. Either slice may be all `None`.
    ///
    /// # Errors
    ///
    /// - [`ColorError::MalformedBounds`] if a slice does not have four
    ///   entries, or if both slices set channels but never the same one
    /// - [`ColorError::InvalidArgument`] if a low bound exceeds its high bound
    ///
    /// # Example
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use tincture::{Color, ColorError};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    ///
    /// // Alpha is set in both slices, so the bounds line up
    /// let opaque_dark = Color::randomise_with(
    ///     &mut rng,
    ///     &[None, None, None, Some(255)],
    ///     &[Some(64), Some(64), Some(64), Some(255)],
    /// )
    /// .unwrap();
    /// assert_eq!(opaque_dark.a, 255);
    /// assert!(opaque_dark.r <= 64);
    ///
    /// // Low only sets alpha, high only sets red: misaligned
    /// let misaligned = Color::randomise_with(
    ///     &mut rng,
    ///     &[None, None, None, Some(255)],
    ///     &[Some(64), None, None, None],
    /// );
    /// assert!(matches!(misaligned, Err(ColorError::MalformedBounds(_))));
    /// ```
    pub fn randomise_with<R: Rng + ?Sized>(
        rng: &mut R,
        low: &[Option<u8>],
        high: &[Option<u8>],
    ) -> Result<Color> {
        check_arity("low", low)?;
        check_arity("high", high)?;

        let any_low = low.iter().any(Option::is_some);
        let any_high = high.iter().any(Option::is_some);
        let aligned = low
            .iter()
            .zip(high)
            .any(|(lo, hi)| lo.is_some() && hi.is_some());
        if any_low && any_high && !aligned {
            tracing::debug!(?low, ?high, "Rejected misaligned bounds");
            return Err(ColorError::MalformedBounds(
                "low and high bounds do not share any channel".to_string(),
            ));
        }

        let mut color = Color::new(0, 0, 0, 0);
        for channel in Channel::ALL {
            let i = channel.index();
            let lo = low[i].unwrap_or(u8::MIN);
            let hi = high[i].unwrap_or(u8::MAX);
            if lo > hi {
                tracing::debug!(%channel, lo, hi, "Rejected inverted bounds");
                return Err(ColorError::InvalidArgument(format!(
                    "{channel} low bound {lo} exceeds high bound {hi}"
                )));
            }
            color[channel] = rng.gen_range(lo..=hi);
        }
        Ok(color)
    }
}
