//! Common test infrastructure for tincture integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a fmt subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `tincture=debug` so rejected arguments
/// show up when a test is run with `--nocapture`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tincture=debug".into()),
            )
            .without_time()
            .with_test_writer()
            .try_init();
    });
}
