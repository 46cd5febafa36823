//! Structured logging setup using tracing
//!
//! Console output goes to stderr so that stdout stays free for command
//! output and JSON-lines UI messages.

use crate::config::LoggingConfig;
use crate::domain::{ArtboardError, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// File name prefix of rolled log files
const LOG_FILE_PREFIX: &str = "artboard.log";

/// Keeps the non-blocking file writer alive
///
/// Dropping the guard flushes buffered file output, so hold it until the
/// process is about to exit.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Installs the global subscriber for the CLI
///
/// `RUST_LOG` takes precedence over `level` when set. Console output is
/// human readable; the optional file output is one JSON object per event,
/// with span close events carrying preview timings.
///
/// # Errors
///
/// Returns a configuration error for an unknown level, an unknown rotation,
/// a log directory that cannot be created, or a subscriber that is already
/// installed.
pub fn init_logging(level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(level)?;
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("artboard={level}")))
    };

    let mut layers: Vec<BoxedLayer> = vec![tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter())
        .boxed()];

    let file_guard = if config.local_enabled {
        let (layer, guard) = json_file_layer(config)?;
        layers.push(layer.with_filter(filter()).boxed());
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| ArtboardError::Configuration(format!("Failed to initialize logging: {e}")))?;

    tracing::debug!(
        level = %level,
        file_logging = config.local_enabled,
        log_dir = %config.local_path,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn json_file_layer(config: &LoggingConfig) -> Result<(BoxedLayer, WorkerGuard)> {
    let rotation = parse_rotation(&config.local_rotation)?;
    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        ArtboardError::Configuration(format!(
            "Cannot create log directory {}: {e}",
            config.local_path
        ))
    })?;

    let appender = RollingFileAppender::new(rotation, &config.local_path, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(writer)
        .boxed();

    Ok((layer, guard))
}

fn parse_log_level(level: &str) -> Result<Level> {
    level.trim().parse::<Level>().map_err(|_| {
        ArtboardError::Configuration(format!(
            "Unknown log level '{level}' (expected trace, debug, info, warn or error)"
        ))
    })
}

fn parse_rotation(rotation: &str) -> Result<Rotation> {
    match rotation {
        "daily" => Ok(Rotation::DAILY),
        "hourly" => Ok(Rotation::HOURLY),
        "never" => Ok(Rotation::NEVER),
        other => Err(ArtboardError::Configuration(format!(
            "Unknown log rotation '{other}' (expected daily, hourly or never)"
        ))),
    }
}
