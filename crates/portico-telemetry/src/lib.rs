//! Logging for Portico via the `tracing` ecosystem

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global `tracing` subscriber
///
/// Installs an `EnvFilter` built from the configured directive with a fmt
/// layer. Call once at startup, before any request handling.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed
pub fn init(log_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
