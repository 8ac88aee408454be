#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for profile resolution.
pub const TRACING_TARGET_PROFILE: &str = "intelliclaim_config::profile";

/// Tracing target for registry construction.
pub const TRACING_TARGET_REGISTRY: &str = "intelliclaim_config::registry";

mod endpoints;
mod error;
mod overrides;
mod profile;
mod registry;
mod settings;
mod views;

#[doc(hidden)]
pub mod prelude;

pub use crate::endpoints::{ApiEndpoints, Endpoint};
pub use crate::error::{Error, Result};
pub use crate::overrides::{ProfileOverrides, ProfileOverridesBuilder, ProfileOverridesBuilderError};
pub use crate::profile::Profile;
pub use crate::registry::SettingsRegistry;
pub use crate::settings::{
    ApiSettings, DocumentSettings, FeatureFlags, LogFormatFields, LogLevel, LoggingSettings,
    ModelSettings, ProcessingSettings, RetrievalSettings, SecuritySettings, Settings,
    StorageSettings,
};
pub use crate::views::{ApiConfig, ModelConfig};
