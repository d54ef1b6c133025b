//! Command-line admin console for the transparency platform
#![forbid(unsafe_code)]

use clap::Parser;
use transparency_console::cli::Cli;
use transparency_console::commands;
use transparency_core::config::{Config, OutputFormat};
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up TRANSPARENCY__* variables from a local .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config: Config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json {
        config.console.output = OutputFormat::Json;
    }

    transparency_core::init_logging(&config.logging)?;

    if cli.no_color || !config.console.color {
        colored::control::set_override(false);
    }

    debug!(output = ?config.console.output, "Configuration loaded");

    commands::run(cli.command, &config).await
}
