use std::{fs::create_dir_all, io, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{
    Level,
    subscriber::{SetGlobalDefaultError, set_global_default},
};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{layer::SubscriberExt, registry};

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// The directory the daily log files are written to.
    pub directory: PathBuf,

    /// The most verbose level logged, e.g. `info` or `debug`.
    pub level: String,

    /// The number of daily log files kept.
    pub max_log_files: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./logs"),
            level: "info".to_string(),
            max_log_files: 90,
        }
    }
}

/// Create and set the global loggers.
///
/// Logs go to a daily rolling file and to stderr, keeping stdout free for output.
/// The returned guards must be held until the program exits.
pub fn init_logger(config: &LoggerConfig) -> Result<Vec<WorkerGuard>, LoggerError> {
    let level: Level = config
        .level
        .parse()
        .map_err(|_| LoggerError::InvalidLevel(config.level.clone()))?;

    create_dir_all(&config.directory).map_err(LoggerError::CreateDirectory)?;

    let filter = tracing_subscriber::filter::Targets::new().with_default(level);

    // File layer
    let (file_guard, file_layer) = {
        let appender = RollingFileAppender::builder()
            .filename_suffix("log")
            .rotation(Rotation::DAILY)
            .max_log_files(config.max_log_files)
            .build(&config.directory)?;

        let (writer, guard) = tracing_appender::non_blocking(appender);

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false);

        (guard, layer)
    };

    // Console layer
    let (console_guard, console_layer) = {
        let (writer, guard) = tracing_appender::non_blocking(io::stderr());

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(true)
            .with_target(false);

        (guard, layer)
    };

    let registry = registry()
        .with(file_layer)
        .with(console_layer)
        .with(filter);

    set_global_default(registry)?;

    Ok(vec![file_guard, console_guard])
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Invalid log level '{0}'")]
    InvalidLevel(String),

    #[error("Failed to create rolling appender:\n{0}")]
    CreateRollingAppender(#[from] tracing_appender::rolling::InitError),

    #[error("Failed to create log directory:\n{0}")]
    CreateDirectory(#[source] io::Error),

    #[error("Failed to set the global logger:\n{0}")]
    SetGlobal(#[from] SetGlobalDefaultError),
}
