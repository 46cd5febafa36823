// Artboard - Export Naming & Grouping Engine
// Copyright (c) 2025 Artboard Contributors
// Licensed under the MIT License

use artboard::cli::{Cli, Commands};
use artboard::config::{load_config_or_default, ArtboardConfig, LoggingConfig};
use artboard::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Configuration errors are reported after logging is up
    let config = load_config_or_default(cli.config.as_deref());

    let (log_level, logging_config) = match &config {
        Ok(config) => (
            cli.log_level
                .clone()
                .unwrap_or_else(|| config.application.log_level.clone()),
            config.logging.clone(),
        ),
        Err(_) => (
            cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
            LoggingConfig::default(),
        ),
    };

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Artboard starting");

    let exit_code = match execute_command(&cli, config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5 // Fatal error exit code
        }
    };

    // process::exit skips destructors, flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(
    cli: &Cli,
    config: artboard::domain::Result<ArtboardConfig>,
) -> anyhow::Result<i32> {
    let config = match config {
        Ok(config) => config,
        Err(e) if cli.command.needs_config() => {
            tracing::error!(error = %e, "Configuration error");
            eprintln!("Configuration error: {e}");
            return Ok(2);
        }
        Err(_) => ArtboardConfig::default(),
    };

    match &cli.command {
        Commands::Preview(args) => args.execute(&config).await,
        Commands::Plan(args) => args.execute().await,
        Commands::Summary(args) => args.execute().await,
        Commands::Session(args) => args.execute(&config).await,
        Commands::ValidateConfig(args) => args.execute(cli.config.as_deref()).await,
        Commands::Init(args) => args.execute().await,
    }
}
