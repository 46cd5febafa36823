//! Configuration schema types
//!
//! Every section and field has a default, so an empty file (or no file at
//! all) is a valid configuration.

use crate::adapters::host::{ImageFormat, RenderSettings};
use serde::{Deserialize, Serialize};

/// Largest accepted render scale
pub const MAX_EXPORT_SCALE: f64 = 4.0;

/// Main Artboard configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ArtboardConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ArtboardConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Render settings used for every export preview
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            format: self.export.format,
            scale: self.export.scale,
        }
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Raster format requested from the host (only "png")
    #[serde(default)]
    pub format: ImageFormat,

    /// Scale constraint applied to every render
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ImageFormat::default(),
            scale: default_scale(),
        }
    }
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.scale.is_finite() || self.scale <= 0.0 || self.scale > MAX_EXPORT_SCALE {
            return Err(format!(
                "export.scale must be > 0 and <= {MAX_EXPORT_SCALE}, got {}",
                self.scale
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_scale() -> f64 {
    1.0
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_defaults_are_valid() {
        let config = ArtboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.export.scale, 1.0);
        assert_eq!(config.export.format, ImageFormat::Png);
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: ArtboardConfig = toml::from_str("").unwrap();
        assert_eq!(config, ArtboardConfig::default());
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test_case(4.0, true ; "upper bound inclusive")]
    #[test_case(0.25, true ; "fractional")]
    #[test_case(0.0, false ; "zero")]
    #[test_case(-1.0, false ; "negative")]
    #[test_case(4.5, false ; "above max")]
    #[test_case(f64::NAN, false ; "nan")]
    #[test_case(f64::INFINITY, false ; "infinite")]
    fn test_export_scale_bounds(scale: f64, valid: bool) {
        let config = ExportConfig {
            scale,
            ..ExportConfig::default()
        };
        assert_eq!(config.validate().is_ok(), valid);
    }

    #[test]
    fn test_unsupported_format_is_rejected_at_parse_time() {
        let result: Result<ArtboardConfig, _> = toml::from_str("[export]\nformat = \"jpg\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "never".to_string();
        config.local_enabled = true;
        config.local_path = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_render_settings_follow_export_config() {
        let mut config = ArtboardConfig::default();
        config.export.scale = 2.0;
        let settings = config.render_settings();
        assert_eq!(settings.scale, 2.0);
        assert_eq!(settings.format, ImageFormat::Png);
    }
}
