//! Error types for intelliclaim-config.

use thiserror::Error;

/// Error type for the intelliclaim-config library.
///
/// Profile resolution and the derived views are total; only validation,
/// endpoint parsing and rendering can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// A setting holds a value outside its valid range.
    #[error("Invalid setting `{field}`: {reason}")]
    InvalidSetting {
        /// Dotted path of the offending field, e.g. `document.chunk_overlap`.
        field: &'static str,
        /// Human-readable explanation.
        reason: String,
    },

    /// A URL could not be parsed or is not usable as an API base.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// JSON rendering failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates an invalid setting error.
    pub fn invalid_setting(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field,
            reason: reason.into(),
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the offending field for [`Error::InvalidSetting`].
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidSetting { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias for intelliclaim-config operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_setting_display_names_field() {
        let err = Error::invalid_setting("retrieval.top_k", "must be greater than 0");
        assert_eq!(
            err.to_string(),
            "Invalid setting `retrieval.top_k`: must be greater than 0"
        );
        assert_eq!(err.field(), Some("retrieval.top_k"));
    }

    #[test]
    fn invalid_url_has_no_field() {
        let err = Error::invalid_url("ftp://x", "unsupported scheme");
        assert!(err.to_string().contains("ftp://x"));
        assert!(err.field().is_none());
    }
}
