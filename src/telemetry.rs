//! Tracing subscriber setup shared by the server and the CLI.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `default_level` when set. `format` is `text` or `json`.
///
/// # Errors
///
/// Returns an error if `default_level` is not a valid filter directive or a
/// subscriber is already installed.
pub fn init(default_level: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}
