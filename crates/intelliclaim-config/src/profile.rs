//! Deployment profile selection.
//!
//! This module provides the [`Profile`] enum and its resolution from the
//! `ENVIRONMENT` variable. Resolution is total: anything other than a
//! case-insensitive `"production"` selects [`Profile::Development`].

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::TRACING_TARGET_PROFILE;
use crate::overrides::ProfileOverrides;
use crate::settings::LogLevel;

/// Named bundle of overrides layered on top of the base settings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Local development: verbose logging, permissive CORS, no rate limiting.
    #[default]
    Development,
    /// Production deployment: quiet logging, rate limiting, fixed origins.
    Production,
}

impl Profile {
    /// Environment variable consulted by [`Profile::resolve`].
    pub const ENV_VAR: &'static str = "ENVIRONMENT";

    /// Resolves the profile from the process environment.
    ///
    /// Never fails: a missing, non-UTF-8 or unrecognized value yields
    /// [`Profile::Development`].
    #[must_use]
    pub fn resolve() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the profile through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        Self::from_env_value(lookup(Self::ENV_VAR).as_deref())
    }

    /// Maps a raw `ENVIRONMENT` value to a profile.
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        let profile = match value {
            Some(raw) if raw.to_lowercase() == "production" => Self::Production,
            _ => Self::Development,
        };

        tracing::debug!(
            target: TRACING_TARGET_PROFILE,
            raw = ?value,
            profile = %profile,
            "Resolved deployment profile"
        );

        profile
    }

    /// Returns the declarative override table for this profile.
    #[must_use]
    pub fn overrides(self) -> ProfileOverrides {
        match self {
            Self::Development => ProfileOverrides {
                debug: Some(true),
                log_level: Some(LogLevel::Debug),
                enable_rate_limiting: Some(false),
                allowed_origins: None,
            },
            Self::Production => ProfileOverrides {
                debug: Some(false),
                log_level: Some(LogLevel::Warning),
                enable_rate_limiting: Some(true),
                allowed_origins: Some(vec![
                    "https://yourdomain.com".to_owned(),
                    "https://www.yourdomain.com".to_owned(),
                ]),
            },
        }
    }

    /// Check if this is the production profile
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is the development profile
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}
