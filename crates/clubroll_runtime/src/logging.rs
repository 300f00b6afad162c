//! Log subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

use crate::config::RuntimeConfig;

/// Installs a stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configuration's default directive
/// is used. Calling this more than once is harmless.
pub fn init(config: &RuntimeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
