//! Client-side endpoint table for the query API.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use url::Url;

use crate::error::{Error, Result};
use crate::settings::ApiSettings;

/// Routes exposed by the query API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// `POST /query`: ask a question about uploaded documents.
    Query,
    /// `POST /upload`: upload a document for indexing.
    Upload,
    /// `GET /health`: liveness probe.
    Health,
}

impl Endpoint {
    /// Returns the path segment of this route.
    #[must_use]
    pub fn path(self) -> &'static str {
        self.into()
    }
}

/// Base URL of a running API together with its route URLs.
///
/// # Examples
///
/// ```
/// use intelliclaim_config::ApiEndpoints;
///
/// let endpoints = ApiEndpoints::new("https://claims.example.com/api").unwrap();
/// assert_eq!(endpoints.query().as_str(), "https://claims.example.com/api/query");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoints {
    base_url: Url,
}

impl ApiEndpoints {
    /// Base URL used when none is configured.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";

    /// Parses `base_url` as the API root.
    ///
    /// Any path on the base URL is kept as a prefix for every route.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the URL does not parse or is not an
    /// `http`/`https` URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| Error::invalid_url(base_url, e))?;
        Self::from_url(parsed)
    }

    /// Uses an already parsed URL as the API root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] for non-HTTP schemes.
    pub fn from_url(base_url: Url) -> Result<Self> {
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(Error::invalid_url(
                base_url.as_str(),
                "expected an http or https URL",
            ));
        }
        Ok(Self { base_url })
    }

    /// Derives the endpoints a local client uses to reach `api`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the bind address cannot form a URL.
    pub fn from_api_settings(api: &ApiSettings) -> Result<Self> {
        Self::from_url(api.client_base_url()?)
    }

    /// Returns the API root.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the URL of `endpoint`.
    #[must_use]
    pub fn endpoint(&self, endpoint: Endpoint) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(endpoint.path());
        }
        url
    }

    /// Returns the query route.
    #[must_use]
    pub fn query(&self) -> Url {
        self.endpoint(Endpoint::Query)
    }

    /// Returns the upload route.
    #[must_use]
    pub fn upload(&self) -> Url {
        self.endpoint(Endpoint::Upload)
    }

    /// Returns the health route.
    #[must_use]
    pub fn health(&self) -> Url {
        self.endpoint(Endpoint::Health)
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        let base_url = Url::parse(Self::DEFAULT_BASE_URL)
            .unwrap_or_else(|_| unreachable!("default base URL is valid"));
        Self { base_url }
    }
}
