//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ArtboardConfig;
use crate::domain::errors::ArtboardError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// File looked up when no configuration path is given
pub const DEFAULT_CONFIG_PATH: &str = "artboard.toml";

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ArtboardConfig
/// 4. Applies environment variable overrides (ARTBOARD_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use artboard::config::loader::load_config;
///
/// let config = load_config("artboard.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ArtboardConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ArtboardError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ArtboardError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: ArtboardConfig = toml::from_str(&contents)
        .map_err(|e| ArtboardError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(config)
}

/// Loads the configuration the command line asked for
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is used
/// when present and built-in defaults otherwise. Environment overrides and
/// validation apply in every case.
pub fn load_config_or_default(path: Option<&str>) -> Result<ArtboardConfig> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
        None => {
            tracing::debug!("No configuration file, using defaults");
            finish(ArtboardConfig::default())
        }
    }
}

fn finish(mut config: ArtboardConfig) -> Result<ArtboardConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ArtboardError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in ENV_PLACEHOLDER.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&cap[0], &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ArtboardError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using ARTBOARD_* prefix
///
/// Environment variables follow the pattern: ARTBOARD_<SECTION>_<KEY>
fn apply_env_overrides(config: &mut ArtboardConfig) -> Result<()> {
    if let Ok(val) = std::env::var("ARTBOARD_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("ARTBOARD_EXPORT_SCALE") {
        config.export.scale = val.parse().map_err(|_| {
            ArtboardError::Configuration(format!("ARTBOARD_EXPORT_SCALE is not a number: {val}"))
        })?;
    }

    if let Ok(val) = std::env::var("ARTBOARD_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().map_err(|_| {
            ArtboardError::Configuration(format!(
                "ARTBOARD_LOGGING_LOCAL_ENABLED must be true or false: {val}"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("ARTBOARD_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
