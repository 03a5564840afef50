//! Tracing subscriber setup for the demo binaries.
//!
//! Installs a `tracing-subscriber` fmt layer writing to stderr, filtered by
//! `RUST_LOG` when set and by the configured trace level otherwise. Stdout
//! stays reserved for the rendered UI.

use tracing_subscriber::EnvFilter;

use crate::Config;

/// Initializes the global tracing subscriber.
///
/// Idempotent: only the first call takes effect, later calls are ignored.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
