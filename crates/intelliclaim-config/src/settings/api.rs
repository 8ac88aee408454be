//! API identity and network binding.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use semver::Version;
use serde::{Deserialize, Serialize};
use url::Url;

use super::defaults;
use crate::error::{Error, Result};

/// API identity and network binding settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[must_use = "config does nothing unless you use it"]
pub struct ApiSettings {
    /// Human-readable API title.
    pub title: String,

    /// Semantic version of the API.
    pub version: Version,

    /// Address the HTTP layer binds to.
    ///
    /// `0.0.0.0` binds every interface.
    pub host: IpAddr,

    /// TCP port the HTTP layer listens on.
    pub port: u16,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            title: defaults::API_TITLE.to_owned(),
            version: defaults::API_VERSION,
            host: defaults::API_HOST,
            port: defaults::API_PORT,
        }
    }
}

impl ApiSettings {
    /// Returns the complete socket address for server binding.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns whether the server is configured to bind to all interfaces.
    ///
    /// This is true when the host is set to "0.0.0.0" (IPv4) or "::" (IPv6).
    #[must_use]
    pub const fn binds_to_all_interfaces(&self) -> bool {
        match self.host {
            IpAddr::V4(addr) => addr.is_unspecified(),
            IpAddr::V6(addr) => addr.is_unspecified(),
        }
    }

    /// Returns the URL a local client should use to reach the API.
    ///
    /// An unspecified bind address is not routable, so it is replaced with
    /// the loopback address of the same family.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the address cannot form a URL.
    pub fn client_base_url(&self) -> Result<Url> {
        let host = match self.host {
            IpAddr::V4(addr) if addr.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpAddr::V6(addr) if addr.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
            other => other,
        };

        let raw = format!("http://{}", SocketAddr::new(host, self.port));
        Url::parse(&raw).map_err(|e| Error::invalid_url(raw, e))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::invalid_setting("api.title", "must not be empty"));
        }

        if self.port == 0 {
            return Err(Error::invalid_setting(
                "api.port",
                "must be between 1 and 65535",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces() {
        let api = ApiSettings::default();
        assert!(api.binds_to_all_interfaces());
        assert_eq!(api.bind_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn client_url_rewrites_unspecified_host() {
        let api = ApiSettings::default();
        assert_eq!(
            api.client_base_url().unwrap().as_str(),
            "http://127.0.0.1:8000/"
        );

        let api = ApiSettings {
            host: "::".parse().unwrap(),
            ..ApiSettings::default()
        };
        assert_eq!(api.client_base_url().unwrap().as_str(), "http://[::1]:8000/");
    }

    #[test]
    fn client_url_keeps_concrete_host() {
        let api = ApiSettings {
            host: "10.0.0.7".parse().unwrap(),
            port: 9443,
            ..ApiSettings::default()
        };
        assert!(!api.binds_to_all_interfaces());
        assert_eq!(api.client_base_url().unwrap().as_str(), "http://10.0.0.7:9443/");
    }

    #[test]
    fn reject_empty_title_and_zero_port() {
        let mut api = ApiSettings::default();
        api.title = "  ".to_owned();
        assert_eq!(api.validate().unwrap_err().field(), Some("api.title"));

        let mut api = ApiSettings::default();
        api.port = 0;
        assert_eq!(api.validate().unwrap_err().field(), Some("api.port"));
    }
}
