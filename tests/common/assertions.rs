//! Assertion helpers for tests.

use tincture::{AlphaPolicy, Color};

/// Assert every channel, alpha included, is within `tolerance`.
#[track_caller]
pub fn assert_close(actual: Color, expected: Color, tolerance: u8) {
    assert!(
        actual.approx_equal(expected, tolerance, AlphaPolicy::Include),
        "Expected {expected} within {tolerance}, got {actual}"
    );
}

/// Assert two floats agree within `tolerance`.
#[track_caller]
pub fn assert_near(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {expected} +/- {tolerance}, got {actual}"
    );
}
