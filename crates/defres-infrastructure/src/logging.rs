//! Structured logging with tracing
//!
//! One subscriber is installed per process: an `EnvFilter` (overridable with
//! `DEFRES_LOG`), a stdout layer and, when `file_output` is set, a daily
//! rolling file layer keeping at most `max_files` files.

use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_ENV_FILTER, LOG_FILE_EXTENSION};
use crate::error_ext::ErrorContext;
use defres_domain::error::{Error, Result};
use std::path::Path;
use tracing::{Level, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

pub use crate::config::LoggingConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber described by `config`
///
/// Fails when the level is invalid, the log directory cannot be created, or
/// a global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_FILTER).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut layers = vec![stdout_layer(config.json_format)];
    if let Some(appender) = file_appender(&config)? {
        layers.push(file_layer(appender, config.json_format));
    }

    Registry::default()
        .with(layers)
        .with(filter)
        .try_init()
        .config_context("Failed to install logging subscriber")?;

    info!(
        level = %level,
        json = config.json_format,
        file = ?config.file_output,
        "Logging initialized"
    );
    Ok(())
}

/// Daily rolling appender for `config.file_output`, if configured
///
/// Files are named `<stem>.<date>.log` in the directory of `file_output`;
/// older files beyond `max_files` are removed on rotation.
pub fn file_appender(config: &LoggingConfig) -> Result<Option<RollingFileAppender>> {
    let Some(path) = config.file_output.as_deref() else {
        return Ok(None);
    };

    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_stem()
        .map_or_else(|| DEFAULT_LOG_FILE_STEM.into(), |stem| stem.to_string_lossy());

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix.as_ref())
        .filename_suffix(LOG_FILE_EXTENSION)
        .max_log_files(config.max_files.max(1))
        .build(directory)
        .io_context(format!("Failed to open log directory {}", directory.display()))
        .map(Some)
}

fn stdout_layer(json: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

fn file_layer(appender: RollingFileAppender, json: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            level
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        warn!(path = %config_path.display(), "Configuration file not found");
    }
}
