//! Gamma transfer functions
//!
//! Decoding an 8-bit channel goes through a 256-entry table generated at
//! compile time by build.rs. Float inputs use the exact IEC 61966-2-1 curve.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Decode an 8-bit sRGB channel to linear light.
///
/// # Example
/// ```
/// use tincture_space::srgb8_to_linear;
/// assert_eq!(srgb8_to_linear(0), 0.0);
/// assert!((srgb8_to_linear(255) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn srgb8_to_linear(value: u8) -> f64 {
    SRGB8_TO_LINEAR[value as usize]
}

/// Decode a gamma-encoded sRGB component (0.0..=1.0) to linear light.
#[inline]
pub fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear light value to gamma-encoded sRGB.
///
/// Negative input (out-of-gamut results from Oklab) encodes to 0.0.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.0 {
        0.0
    } else if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
