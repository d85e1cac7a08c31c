//! Logging initialization
//!
//! Logs go to stderr so that stdout carries nothing but verdicts.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process
///
/// `RUST_LOG` takes precedence; otherwise the level follows the number of
/// `-v` flags: warn, info, then debug.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
