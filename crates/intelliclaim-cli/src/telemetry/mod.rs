//! Telemetry and tracing configuration.

mod tracing;

use anyhow::Context;
use intelliclaim_config::LoggingSettings;

/// Initializes the tracing subscriber for the resolved logging settings.
///
/// # Errors
///
/// Returns an error if the tracing subscriber fails to initialize.
pub(crate) fn init_tracing(logging: &LoggingSettings) -> anyhow::Result<()> {
    tracing::init_tracing(logging).context("Failed to initialize tracing")
}
