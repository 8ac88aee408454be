//! Field-wise overrides merged over the base settings.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::settings::{LogLevel, Settings};

/// A sparse set of setting values that take precedence over a base bundle.
///
/// Every field is optional; `None` means "inherit the base value". Profiles
/// expose their table through [`Profile::overrides`], and callers can build
/// their own with [`ProfileOverrides::builder`].
///
/// [`Profile::overrides`]: crate::Profile::overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[must_use = "overrides do nothing unless applied"]
#[builder(
    name = "ProfileOverridesBuilder",
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with")
)]
pub struct ProfileOverrides {
    /// Replaces [`Settings::debug`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,

    /// Replaces [`LoggingSettings::level`](crate::LoggingSettings::level).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,

    /// Replaces [`FeatureFlags::enable_rate_limiting`](crate::FeatureFlags::enable_rate_limiting).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_rate_limiting: Option<bool>,

    /// Replaces [`SecuritySettings::allowed_origins`](crate::SecuritySettings::allowed_origins).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

impl ProfileOverrides {
    /// Creates a new overrides builder.
    pub fn builder() -> ProfileOverridesBuilder {
        ProfileOverridesBuilder::default()
    }

    /// Merges these overrides over `base`, field by field.
    pub fn apply(&self, mut base: Settings) -> Settings {
        if let Some(debug) = self.debug {
            base.debug = debug;
        }
        if let Some(level) = self.log_level {
            base.logging.level = level;
        }
        if let Some(enabled) = self.enable_rate_limiting {
            base.features.enable_rate_limiting = enabled;
        }
        if let Some(origins) = &self.allowed_origins {
            base.security.allowed_origins.clone_from(origins);
        }
        base
    }

    /// Returns whether no field is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overridden_fields().is_empty()
    }

    /// Returns the dotted paths of the fields these overrides replace.
    #[must_use]
    pub fn overridden_fields(&self) -> Vec<&'static str> {
        [
            self.debug.is_some().then_some("debug"),
            self.log_level.is_some().then_some("logging.level"),
            self.enable_rate_limiting
                .is_some()
                .then_some("features.enable_rate_limiting"),
            self.allowed_origins
                .is_some()
                .then_some("security.allowed_origins"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
