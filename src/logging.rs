use std::str::FromStr;

use sysinfo::{ProcessExt, System, SystemExt, get_current_pid};
use thiserror::Error;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    filter::FromEnvError,
    fmt,
    prelude::*,
    util::TryInitError,
};

use crate::config::LoggingConfig;

pub const LOG_FILE_PREFIX: &str = "eflex-bridge";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 5;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("unknown log level `{0}`")]
    Level(String),
    #[error("RUST_LOG: {0}")]
    Filter(#[from] FromEnvError),
    #[error("log file: {0}")]
    Appender(#[from] InitError),
    #[error("installing subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Install console and rolling file output.
/// `RUST_LOG` wins over the configured level when set.
/// Keep the guard alive until exit or buffered lines are lost.
pub fn init(cfg: &LoggingConfig) -> Result<WorkerGuard, LoggingError> {
    let level = parse_level(&cfg.log_level)?;
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env()?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(&cfg.log_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()?;

    Ok(guard)
}

/// Accepts tracing level names plus `warning` and `critical`
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    let normalized = match level.to_ascii_lowercase().as_str() {
        "warning" => "warn".to_string(),
        "critical" => "error".to_string(),
        other => other.to_string(),
    };
    LevelFilter::from_str(&normalized).map_err(|_| LoggingError::Level(level.to_string()))
}

pub fn log_memory_usage(context: &str) {
    let pid = match get_current_pid() {
        Ok(pid) => pid,
        Err(e) => {
            warn!("memory profile: {e}");
            return;
        }
    };

    let mut sys = System::new();
    if !sys.refresh_process(pid) {
        warn!("memory profile: process {pid} not found");
        return;
    }
    if let Some(process) = sys.process(pid) {
        info!(
            "{context}: rss {} bytes, virtual {} bytes",
            process.memory(),
            process.virtual_memory()
        );
    }
}
