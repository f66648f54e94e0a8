//! Tracing initialization for the binary.
//!
//! Library code only emits events; the subscriber is installed here, once,
//! by `main`.

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. Safe to call multiple
/// times (subsequent calls are no-ops).
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
