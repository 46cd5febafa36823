//! Configuration management for Artboard.
//!
//! # Overview
//!
//! Artboard uses an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `ARTBOARD_*` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use artboard::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("artboard.toml")?;
//! println!("Render scale: {}", config.export.scale);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! format = "png"
//! scale = 1.0
//!
//! [logging]
//! local_enabled = true
//! local_path = "${ARTBOARD_LOG_DIR}"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, DEFAULT_CONFIG_PATH};
pub use schema::{ApplicationConfig, ArtboardConfig, ExportConfig, LoggingConfig};
