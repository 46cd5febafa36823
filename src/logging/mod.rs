//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console output on stderr
//! - JSON-formatted local log files with rotation
//! - Configurable log levels
//!
//! # Example
//!
//! ```no_run
//! use artboard::logging::init_logging;
//! use artboard::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export preview
///
/// # Example
///
/// ```no_run
/// use artboard::log_preview_start;
///
/// log_preview_start!(5, 3);
/// ```
#[macro_export]
macro_rules! log_preview_start {
    ($selected:expr, $exportables:expr) => {
        tracing::info!(
            selected = $selected,
            exportables = $exportables,
            "Starting export preview"
        );
    };
}

/// Log the completion of an export preview
///
/// # Example
///
/// ```no_run
/// use artboard::log_preview_complete;
/// use std::time::Duration;
///
/// log_preview_complete!(3, Duration::from_millis(120));
/// ```
#[macro_export]
macro_rules! log_preview_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Export preview completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use artboard::log_error_with_context;
/// use artboard::domain::ArtboardError;
///
/// let error = ArtboardError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = %$context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::domain::RenderError;
    use std::time::Duration;

    #[test]
    fn test_macros_expand_without_subscriber() {
        crate::log_preview_start!(2usize, 1usize);
        crate::log_preview_complete!(1usize, Duration::from_millis(5));
        crate::log_error_with_context!(&RenderError::new("boom"), "rendering");
    }
}
