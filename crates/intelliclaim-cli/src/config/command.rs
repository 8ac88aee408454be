//! Subcommands.

use clap::{Args, Subcommand};

/// What the binary does with the resolved registry.
#[derive(Debug, Default, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the active profile and the whole resolved settings bundle.
    #[default]
    Show,
    /// Print the model view.
    Model,
    /// Print the API view.
    Api,
    /// Print the client endpoint URLs.
    Endpoints(EndpointsArgs),
    /// Validate the resolved settings; exits non-zero on failure.
    Check,
}

impl Command {
    /// Returns the subcommand name as typed on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Model => "model",
            Self::Api => "api",
            Self::Endpoints(_) => "endpoints",
            Self::Check => "check",
        }
    }
}

/// Options for the `endpoints` subcommand.
#[derive(Debug, Default, Clone, PartialEq, Eq, Args)]
pub struct EndpointsArgs {
    /// Base URL of a running API.
    ///
    /// Derived from the configured host and port when omitted.
    #[arg(long, env = "API_URL")]
    pub api_url: Option<String>,
}
