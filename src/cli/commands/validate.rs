//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Artboard configuration file.

use crate::config::{load_config_or_default, DEFAULT_CONFIG_PATH};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let shown_path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
        tracing::info!(config_path = %shown_path, "Validating configuration");

        println!("🔍 Validating configuration file: {shown_path}");
        println!();

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Export Format: {}", config.export.format);
        println!("  Export Scale: {}", config.export.scale);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();

        Ok(0)
    }
}
