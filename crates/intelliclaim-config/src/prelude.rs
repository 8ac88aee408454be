//! Prelude module for intelliclaim-config.
//!
//! Re-exports the types most consumers of the registry need.

pub use crate::error::{Error, Result};
pub use crate::profile::Profile;
pub use crate::registry::SettingsRegistry;
pub use crate::settings::{LogLevel, Settings};
pub use crate::views::{ApiConfig, ModelConfig};
