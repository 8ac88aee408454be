//! The resolved, immutable settings registry.

use std::sync::Arc;

use crate::TRACING_TARGET_REGISTRY;
use crate::overrides::ProfileOverrides;
use crate::profile::Profile;
use crate::settings::Settings;
use crate::views::{ApiConfig, ModelConfig};

/// Base settings with exactly one profile applied.
///
/// Build it once at start-up and hand clones (or references) to the
/// components that need configuration. Clones share the same bundle.
///
/// # Examples
///
/// ```
/// use intelliclaim_config::{Profile, SettingsRegistry};
///
/// let registry = SettingsRegistry::for_profile(Profile::Production);
/// assert_eq!(registry.settings().logging.level.as_ref(), "WARNING");
/// assert_eq!(registry.model_config().top_k, 5);
/// ```
#[derive(Debug, Clone)]
pub struct SettingsRegistry {
    profile: Profile,
    settings: Arc<Settings>,
}

impl SettingsRegistry {
    /// Resolves the profile from `ENVIRONMENT` and applies it.
    #[must_use]
    pub fn from_env() -> Self {
        Self::for_profile(Profile::resolve())
    }

    /// Resolves the profile through `lookup` and applies it.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        Self::for_profile(Profile::from_lookup(lookup))
    }

    /// Applies the override table of `profile` to the base bundle.
    #[must_use]
    pub fn for_profile(profile: Profile) -> Self {
        Self::with_overrides(profile, &profile.overrides())
    }

    /// Applies custom `overrides` to the base bundle under `profile`'s name.
    #[must_use]
    pub fn with_overrides(profile: Profile, overrides: &ProfileOverrides) -> Self {
        let settings = overrides.apply(Settings::default());

        tracing::debug!(
            target: TRACING_TARGET_REGISTRY,
            profile = %profile,
            overridden = ?overrides.overridden_fields(),
            log_level = %settings.logging.level,
            rate_limiting = settings.features.enable_rate_limiting,
            "Settings registry constructed"
        );

        Self {
            profile,
            settings: Arc::new(settings),
        }
    }

    /// Returns the active profile.
    #[must_use]
    pub const fn profile(&self) -> Profile {
        self.profile
    }

    /// Returns the resolved settings bundle.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns a shared handle to the resolved settings bundle.
    #[must_use]
    pub fn shared_settings(&self) -> Arc<Settings> {
        Arc::clone(&self.settings)
    }

    /// Returns the model-related view.
    #[must_use]
    pub fn model_config(&self) -> ModelConfig {
        self.settings.model_config()
    }

    /// Returns the API-related view.
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        self.settings.api_config()
    }
}

impl Default for SettingsRegistry {
    /// Returns the development registry.
    fn default() -> Self {
        Self::for_profile(Profile::default())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::settings::LogLevel;

    fn registry_with_env(value: Option<&str>) -> SettingsRegistry {
        SettingsRegistry::from_lookup(|_| value.map(str::to_owned))
    }

    #[test]
    fn unset_environment_selects_development() {
        let registry = registry_with_env(None);
        let settings = registry.settings();

        assert_eq!(registry.profile(), Profile::Development);
        assert!(settings.debug);
        assert_eq!(settings.logging.level, LogLevel::Debug);
        assert_eq!(settings.logging.level.as_ref(), "DEBUG");
        assert!(!settings.features.enable_rate_limiting);
        assert_eq!(settings.security.allowed_origins, vec!["*"]);
    }

    #[test]
    fn production_environment_selects_production() {
        let registry = registry_with_env(Some("production"));
        let settings = registry.settings();

        assert_eq!(registry.profile(), Profile::Production);
        assert!(!settings.debug);
        assert_eq!(settings.logging.level.as_ref(), "WARNING");
        assert!(settings.features.enable_rate_limiting);
        assert_eq!(
            settings.security.allowed_origins,
            vec!["https://yourdomain.com", "https://www.yourdomain.com"]
        );
    }

    #[test]
    fn unrecognized_environment_selects_development() {
        for raw in ["staging", "prod", "test", ""] {
            assert_eq!(
                registry_with_env(Some(raw)).profile(),
                Profile::Development
            );
        }
    }

    #[test]
    fn non_overridden_fields_inherit_base() {
        let base = Settings::default();

        for profile in Profile::iter() {
            let registry = SettingsRegistry::for_profile(profile);
            let settings = registry.settings();

            assert_eq!(settings.api, base.api);
            assert_eq!(settings.model, base.model);
            assert_eq!(settings.document, base.document);
            assert_eq!(settings.storage, base.storage);
            assert_eq!(settings.retrieval, base.retrieval);
            assert_eq!(settings.processing, base.processing);
            assert_eq!(settings.security.api_key_header, base.security.api_key_header);
            assert_eq!(settings.logging.format, base.logging.format);
            assert_eq!(settings.features.enable_caching, base.features.enable_caching);
            assert_eq!(
                settings.features.enable_audit_trail,
                base.features.enable_audit_trail
            );
            assert_eq!(
                settings.features.enable_explainability,
                base.features.enable_explainability
            );
        }
    }

    #[test]
    fn model_view_is_profile_independent() {
        let development = SettingsRegistry::for_profile(Profile::Development).model_config();
        let production = SettingsRegistry::for_profile(Profile::Production).model_config();

        assert_eq!(development, production);
        assert_eq!(development, Settings::default().model_config());
        assert_eq!(development.to_map().len(), 6);
    }

    #[test]
    fn api_view_has_four_keys_in_every_profile() {
        for profile in Profile::iter() {
            let api = SettingsRegistry::for_profile(profile).api_config();
            let keys: Vec<_> = api.to_map().keys().cloned().collect();

            let mut expected: Vec<_> = ApiConfig::KEYS.iter().map(|k| k.to_string()).collect();
            expected.sort();
            let mut keys = keys;
            keys.sort();
            assert_eq!(keys, expected);
        }
    }

    #[test]
    fn views_are_idempotent() {
        let registry = SettingsRegistry::for_profile(Profile::Production);

        assert_eq!(registry.model_config(), registry.model_config());
        assert_eq!(registry.api_config(), registry.api_config());
        assert_eq!(registry.model_config().to_map(), registry.model_config().to_map());
    }

    #[test]
    fn every_profile_validates() {
        for profile in Profile::iter() {
            let registry = SettingsRegistry::for_profile(profile);
            assert!(registry.settings().validate().is_ok(), "{profile} is invalid");
        }
    }

    #[test]
    fn clones_share_the_bundle() {
        let registry = SettingsRegistry::default();
        let clone = registry.clone();

        assert!(Arc::ptr_eq(&registry.shared_settings(), &clone.shared_settings()));
        assert_eq!(clone.profile(), Profile::Development);
    }

    #[test]
    fn custom_overrides_use_given_profile_name() {
        let overrides = ProfileOverrides::builder()
            .with_log_level(LogLevel::Critical)
            .build()
            .unwrap();
        let registry = SettingsRegistry::with_overrides(Profile::Production, &overrides);

        assert_eq!(registry.profile(), Profile::Production);
        assert_eq!(registry.settings().logging.level, LogLevel::Critical);
        // Production's own table was not applied.
        assert!(!registry.settings().features.enable_rate_limiting);
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SettingsRegistry>();
    }
}
