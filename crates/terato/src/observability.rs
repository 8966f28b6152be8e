//! Logging setup.
//!
//! Human-readable events go to stderr. A JSON-lines copy goes to a log file:
//! `TERATO_LOG_PATH` if set, otherwise a daily-rotated file in the log
//! directory (`TERATO_LOG_DIR`, the configured `log_dir`, or the platform
//! data directory).

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Explicit log file path.
pub const LOG_PATH_ENV: &str = "TERATO_LOG_PATH";
/// Log directory.
pub const LOG_DIR_ENV: &str = "TERATO_LOG_DIR";

const LOG_FILE_PREFIX: &str = "terato.jsonl";

/// Where the JSON-lines log goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Single file, never rotated. Wins over `log_dir`.
    pub log_file: Option<PathBuf>,
    /// Directory for daily-rotated files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve from the environment, falling back to `config_log_dir` and
    /// then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_file = non_empty_env(LOG_PATH_ENV).map(PathBuf::from);
        let log_dir = non_empty_env(LOG_DIR_ENV)
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(default_log_dir);
        Self { log_file, log_dir }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn default_log_dir() -> Option<PathBuf> {
    terato_core::config::user_data_dir().map(|dir| dir.join("logs").into_std_path_buf())
}

/// The level directive for the given flags.
///
/// `-q` wins over `-v`; without either the configured level applies.
pub fn level_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => config_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Build the filter: `RUST_LOG` if set and valid, else the flag-derived level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, config_level))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file log on drop; keep it alive until exit.
/// An unusable log location disables the file log instead of failing.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_layer, guard, file_error) = match file_writer(config) {
        Ok(Some((writer, guard))) => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard), None)
        }
        Ok(None) => (None, None, None),
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    if let Some(e) = file_error {
        tracing::warn!(error = %e, "file logging disabled");
    }
    Ok(guard)
}

type FileWriter = (tracing_appender::non_blocking::NonBlocking, WorkerGuard);

fn file_writer(config: &ObservabilityConfig) -> anyhow::Result<Option<FileWriter>> {
    let (dir, rotation, prefix) = if let Some(ref file) = config.log_file {
        let name = file
            .file_name()
            .with_context(|| format!("log path has no file name: {}", file.display()))?;
        let dir = file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        (dir, Rotation::NEVER, name.to_string_lossy().into_owned())
    } else if let Some(ref dir) = config.log_dir {
        (dir.as_path(), Rotation::DAILY, LOG_FILE_PREFIX.to_string())
    } else {
        return Ok(None);
    };

    ensure_dir(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(prefix)
        .build(dir)
        .with_context(|| format!("failed to open log file in {}", dir.display()))?;
    Ok(Some(tracing_appender::non_blocking(appender)))
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}
