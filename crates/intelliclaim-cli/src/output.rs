//! Command execution and rendering.

use anyhow::Context;
use intelliclaim_config::{
    ApiConfig, ApiEndpoints, ModelConfig, Profile, Settings, SettingsRegistry,
};
use serde::Serialize;

use crate::TRACING_TARGET_CONFIG;
use crate::config::{Command, EndpointsArgs, OutputFormat};

/// Output of `show`.
#[derive(Debug, Serialize)]
struct ShowReport<'a> {
    profile: Profile,
    settings: &'a Settings,
}

/// Output of `endpoints`.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct EndpointsReport {
    base_url: String,
    query: String,
    upload: String,
    health: String,
}

impl From<&ApiEndpoints> for EndpointsReport {
    fn from(endpoints: &ApiEndpoints) -> Self {
        Self {
            base_url: endpoints.base_url().to_string(),
            query: endpoints.query().to_string(),
            upload: endpoints.upload().to_string(),
            health: endpoints.health().to_string(),
        }
    }
}

/// Output of a successful `check`.
#[derive(Debug, Serialize)]
struct CheckReport {
    profile: Profile,
    valid: bool,
    enabled_features: Vec<&'static str>,
}

/// Runs `command` against `registry` and returns the rendered output.
///
/// # Errors
///
/// Returns an error if validation fails, the endpoint base URL is invalid,
/// or rendering fails.
pub(crate) fn execute(
    command: &Command,
    registry: &SettingsRegistry,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match command {
        Command::Show => render(
            &ShowReport {
                profile: registry.profile(),
                settings: registry.settings(),
            },
            format,
        ),
        Command::Model => render::<ModelConfig>(&registry.model_config(), format),
        Command::Api => render::<ApiConfig>(&registry.api_config(), format),
        Command::Endpoints(args) => {
            let endpoints = resolve_endpoints(args, registry)?;
            render(&EndpointsReport::from(&endpoints), format)
        }
        Command::Check => {
            let settings = registry.settings();
            settings
                .validate()
                .with_context(|| format!("{} settings are invalid", registry.profile()))?;

            tracing::info!(
                target: TRACING_TARGET_CONFIG,
                profile = %registry.profile(),
                "Settings are valid"
            );

            render(
                &CheckReport {
                    profile: registry.profile(),
                    valid: true,
                    enabled_features: settings.features.enabled(),
                },
                format,
            )
        }
    }
}

fn resolve_endpoints(
    args: &EndpointsArgs,
    registry: &SettingsRegistry,
) -> anyhow::Result<ApiEndpoints> {
    match &args.api_url {
        Some(url) => ApiEndpoints::new(url).context("invalid --api-url"),
        None => ApiEndpoints::from_api_settings(&registry.settings().api)
            .context("failed to derive API base URL"),
    }
}

/// Serializes `value` as JSON in the requested layout.
fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
        OutputFormat::Json => serde_json::to_string(value),
    };
    rendered.context("failed to render output")
}
