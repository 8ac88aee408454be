//! Security settings.

use http::HeaderName;
use serde::{Deserialize, Serialize};
use url::Url;

use super::defaults;
use crate::error::{Error, Result};

/// CORS origins and API key header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[must_use = "config does nothing unless you use it"]
pub struct SecuritySettings {
    /// Allowed CORS origins, in order. `"*"` allows any origin.
    pub allowed_origins: Vec<String>,

    /// Name of the request header carrying the API key.
    pub api_key_header: String,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec![defaults::ALLOWED_ORIGIN_ANY.to_owned()],
            api_key_header: defaults::API_KEY_HEADER.to_owned(),
        }
    }
}

impl SecuritySettings {
    /// Returns whether the wildcard origin is configured.
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin == defaults::ALLOWED_ORIGIN_ANY)
    }

    /// Returns whether a request `Origin` is allowed.
    ///
    /// Both sides are compared in their serialized origin form, so host case,
    /// a trailing slash and an explicit default port do not matter.
    #[must_use]
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        if self.allows_any_origin() {
            return true;
        }

        let Some(origin) = serialize_origin(origin) else {
            return false;
        };

        self.allowed_origins
            .iter()
            .filter_map(|allowed| serialize_origin(allowed))
            .any(|allowed| allowed == origin)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.allowed_origins.is_empty() {
            return Err(Error::invalid_setting(
                "security.allowed_origins",
                "at least one origin is required",
            ));
        }

        for origin in &self.allowed_origins {
            if origin == defaults::ALLOWED_ORIGIN_ANY {
                continue;
            }

            let parsed = Url::parse(origin).map_err(|e| {
                Error::invalid_setting(
                    "security.allowed_origins",
                    format!("'{origin}' is not a valid URL: {e}"),
                )
            })?;

            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Error::invalid_setting(
                    "security.allowed_origins",
                    format!("'{origin}' must use http or https"),
                ));
            }

            if parsed.path() != "/" || parsed.query().is_some() || parsed.fragment().is_some() {
                return Err(Error::invalid_setting(
                    "security.allowed_origins",
                    format!("'{origin}' must not have a path, query or fragment"),
                ));
            }
        }

        HeaderName::from_bytes(self.api_key_header.as_bytes()).map_err(|e| {
            Error::invalid_setting(
                "security.api_key_header",
                format!("'{}' is not a valid header name: {e}", self.api_key_header),
            )
        })?;

        Ok(())
    }
}

/// Returns the ASCII serialization of an `http`/`https` origin.
fn serialize_origin(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.origin().ascii_serialization())
}
