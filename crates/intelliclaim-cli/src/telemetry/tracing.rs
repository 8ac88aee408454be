//! Tracing initialization and configuration.

use std::io::IsTerminal;

use intelliclaim_config::{LogLevel, LoggingSettings};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Initializes the tracing subscriber for structured logging.
///
/// # Configuration
///
/// The log level comes from the active profile. `RUST_LOG`, when set,
/// replaces it entirely. Records go to stderr so command output on stdout
/// stays machine-readable.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug intelliclaim show
/// RUST_LOG=intelliclaim_config=trace intelliclaim check
/// ```
///
/// # Errors
///
/// Returns an error if the tracing subscriber fails to initialize.
pub(super) fn init_tracing(logging: &LoggingSettings) -> anyhow::Result<()> {
    let env_filter = create_env_filter(logging.level)?;
    let fmt_layer = create_fmt_layer(logging);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install global subscriber: {e}"))?;

    Ok(())
}

/// Creates an environment filter, falling back to the profile level.
fn create_env_filter(level: LogLevel) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| create_level_filter(level))
        .map_err(|e| anyhow::anyhow!("Failed to create env filter: {e}"))
}

/// Creates a filter admitting `level` and above.
fn create_level_filter(level: LogLevel) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(level.as_filter_directive())
}

/// Creates a formatted tracing layer with the columns the record format asks for.
fn create_fmt_layer(logging: &LoggingSettings) -> Box<dyn Layer<Registry> + Send + Sync> {
    let fields = logging.format_fields();
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(fields.target)
        .with_thread_ids(false)
        .with_level(fields.level)
        .with_ansi(std::io::stderr().is_terminal());

    if fields.timestamp {
        layer.boxed()
    } else {
        layer.without_time().boxed()
    }
}
