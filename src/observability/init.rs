//! Tracing initialization and subscriber setup.
//!
//! Configures the global tracing subscriber: spans and events are filtered by
//! the configured level (overridable through `RUST_LOG`) and written to stderr
//! so they never interleave with rendered markup on stdout.

use crate::Config;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// # Trace Level Resolution
///
/// 1. The `RUST_LOG` environment variable, when set
/// 2. `config.trace_level`, when set
/// 3. Default: `"info"`
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
