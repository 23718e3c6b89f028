//! Hue circle helpers
//!
//! Hue is an angle, so wrapping and interpolation have to respect the
//! circle rather than the number line.

/// Wrap an angle in degrees into `[0, 360)`.
///
/// # Example
/// ```
/// use tincture_space::hue::normalize_degrees;
/// assert_eq!(normalize_degrees(-30.0), 330.0);
/// assert_eq!(normalize_degrees(720.0), 0.0);
/// ```
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed angular distance from `from` to `to` along the shorter arc.
///
/// The result lies in `[-180, 180]`. When the two hues are exactly opposite
/// the arc that starts at the smaller hue and increases is chosen, so that
/// `shortest_delta(a, b) == -shortest_delta(b, a)` always holds.
///
/// # Example
/// ```
/// use tincture_space::hue::shortest_delta;
/// assert_eq!(shortest_delta(350.0, 10.0), 20.0);
/// assert_eq!(shortest_delta(10.0, 350.0), -20.0);
/// assert_eq!(shortest_delta(0.0, 180.0), 180.0);
/// assert_eq!(shortest_delta(180.0, 0.0), -180.0);
/// ```
pub fn shortest_delta(from: f64, to: f64) -> f64 {
    let from = normalize_degrees(from);
    let to = normalize_degrees(to);
    let delta = (to - from).rem_euclid(360.0);

    if delta > 180.0 {
        delta - 360.0
    } else if delta == 180.0 && from > to {
        -180.0
    } else {
        delta
    }
}

/// Interpolate between two hues along the shorter arc.
///
/// `t = 0.0` yields `from`, `t = 1.0` yields `to` (both normalized).
///
/// # Example
/// ```
/// use tincture_space::hue::lerp_hue;
/// // Crossing 0 degrees instead of sweeping through 180
/// assert!((lerp_hue(340.0, 20.0, 0.5) - 0.0).abs() < 1e-9);
/// ```
pub fn lerp_hue(from: f64, to: f64, t: f64) -> f64 {
    normalize_degrees(from + shortest_delta(from, to) * t)
}
