//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── environment: Option<OsString> # Deployment profile selector
//! ├── format: OutputFormat         # pretty | json
//! └── command: Command             # show | model | api | endpoints | check
//! ```
//!
//! Every option can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! # Inspect the production bundle
//! intelliclaim --environment production show
//!
//! # Or via environment variables
//! ENVIRONMENT=production intelliclaim model --format json
//! ```

mod command;

use std::ffi::{OsStr, OsString};
use std::process;

use clap::{Parser, ValueEnum};
pub use command::{Command, EndpointsArgs};
use intelliclaim_config::{Profile, SettingsRegistry};
use serde::{Deserialize, Serialize};

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// How command results are written to stdout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented JSON.
    #[default]
    Pretty,
    /// Single-line JSON.
    Json,
}

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "intelliclaim")]
#[command(about = "Inspect and validate IntelliClaim RAG settings")]
#[command(version)]
pub struct Cli {
    /// Deployment environment.
    ///
    /// A case-insensitive `production` selects the production profile;
    /// anything else, no value or a non-UTF-8 value selects development.
    #[arg(
        long,
        env = "ENVIRONMENT",
        global = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub environment: Option<OsString>,

    /// Output format.
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Command to run; `show` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// The .env file is loaded before clap parses arguments so its values can
    /// act as defaults for `env`-backed options.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Returns the profile selected by `--environment` / `ENVIRONMENT`.
    #[must_use]
    pub fn profile(&self) -> Profile {
        Profile::from_env_value(self.environment.as_deref().and_then(OsStr::to_str))
    }

    /// Builds the settings registry for the selected profile.
    #[must_use]
    pub fn registry(&self) -> SettingsRegistry {
        SettingsRegistry::for_profile(self.profile())
    }

    /// Returns the command to run.
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }

    /// Logs build information and the resolved settings.
    pub fn log(&self, registry: &SettingsRegistry) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );

        let settings = registry.settings();
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            profile = %registry.profile(),
            debug = settings.debug,
            log_level = %settings.logging.level,
            bind_addr = %settings.api.bind_addr(),
            allowed_origins = ?settings.security.allowed_origins,
            features = ?settings.features.enabled(),
            "Settings resolved"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
