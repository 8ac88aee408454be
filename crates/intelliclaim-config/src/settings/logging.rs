//! Logging settings.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::defaults;
use crate::error::{Error, Result};

/// Severity threshold for emitted log records.
///
/// Names follow the conventional upper-case spelling (`DEBUG`, `WARNING`, ...);
/// parsing ignores ASCII case.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Diagnostic detail.
    Debug,
    /// Normal operation.
    #[default]
    Info,
    /// Something unexpected that did not stop the request.
    Warning,
    /// A failed operation.
    Error,
    /// A failure that needs immediate attention.
    Critical,
}

impl LogLevel {
    /// Converts to the closest `tracing::Level`.
    ///
    /// `tracing` has no level above `ERROR`, so `CRITICAL` maps to it.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warning => tracing::Level::WARN,
            Self::Error | Self::Critical => tracing::Level::ERROR,
        }
    }

    /// Returns the matching `EnvFilter` directive.
    #[must_use]
    pub const fn as_filter_directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

/// Columns requested by a `%(...)s` record format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFormatFields {
    /// `%(asctime)s`
    pub timestamp: bool,
    /// `%(name)s`
    pub target: bool,
    /// `%(levelname)s`
    pub level: bool,
}

/// Logging level and record format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[must_use = "config does nothing unless you use it"]
pub struct LoggingSettings {
    /// Minimum severity; set by the active profile.
    pub level: LogLevel,

    /// Record layout using `%(asctime)s`, `%(name)s`, `%(levelname)s` and
    /// `%(message)s` placeholders.
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: defaults::LOG_FORMAT.to_owned(),
        }
    }
}

impl LoggingSettings {
    /// Returns which columns the record format asks for.
    #[must_use]
    pub fn format_fields(&self) -> LogFormatFields {
        LogFormatFields {
            timestamp: self.format.contains("%(asctime)s"),
            target: self.format.contains("%(name)s"),
            level: self.format.contains("%(levelname)s"),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.format.trim().is_empty() {
            return Err(Error::invalid_setting("logging.format", "must not be empty"));
        }
        Ok(())
    }
}
