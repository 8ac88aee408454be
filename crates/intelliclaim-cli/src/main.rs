#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod output;
mod telemetry;

use std::process;

use anyhow::Context;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "intelliclaim_cli::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "intelliclaim_cli::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "intelliclaim_cli::config";

fn main() {
    let Err(error) = run() else {
        tracing::debug!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %format!("{error:#}"),
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
fn run() -> anyhow::Result<()> {
    let cli = Cli::init();
    let registry = cli.registry();

    telemetry::init_tracing(&registry.settings().logging)?;
    cli.log(&registry);

    let command = cli.command();
    let rendered = output::execute(&command, &registry, cli.format)
        .with_context(|| format!("`{}` command failed", command.name()))?;
    println!("{rendered}");

    Ok(())
}
