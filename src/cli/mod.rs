//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Artboard using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Artboard - export naming and grouping for design documents
#[derive(Parser, Debug)]
#[command(name = "artboard")]
#[command(version, about, long_about = None)]
#[command(author = "Artboard Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to artboard.toml when present)
    #[arg(short, long, env = "ARTBOARD_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ARTBOARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the selection of a document and print the export manifest
    Preview(commands::preview::PreviewArgs),

    /// Print planned names for the selection without rendering
    Plan(commands::plan::PlanArgs),

    /// Print the selection summary of a document
    Summary(commands::summary::SummaryArgs),

    /// Serve UI requests read as JSON lines from stdin
    Session(commands::session::SessionArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Commands {
    /// Whether the command needs a loaded configuration to run
    pub fn needs_config(&self) -> bool {
        match self {
            Commands::Preview(_) | Commands::Session(_) => true,
            Commands::Plan(_)
            | Commands::Summary(_)
            | Commands::ValidateConfig(_)
            | Commands::Init(_) => false,
        }
    }
}
