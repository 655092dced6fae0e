//! Logging configuration.
//!
//! Thin wrappers around `log` + `env_logger` so the binary and the tests
//! initialize logging the same way.
//!
//! # Log Levels
//!
//! - `error!` - fatal failures, always shown
//! - `info!` - phase progress (device acquired, kernel compiled, ...)
//! - `debug!` - sizing details (workgroup clamp, grid fold)
//!
//! Set `RUST_LOG` to control output at runtime:
//!
//! ```bash
//! RUST_LOG=debug wgpu-vecadd
//! ```

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging from the RUST_LOG environment variable.
///
/// If RUST_LOG is not set, defaults to Info level.
/// This only initializes once; subsequent calls are no-ops.
pub fn init_from_env() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    });
}

/// Initialize logging for tests.
///
/// Uses test-friendly output and stays quiet unless RUST_LOG is set.
pub fn init_test() {
    // try_init() doesn't panic if already initialized
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .is_test(true)
        .try_init();
}
