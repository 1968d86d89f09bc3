//! File logging. The terminal belongs to the UI, so every record goes
//! through a non-blocking file writer.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use crate::app::settings::user_cache_dir;
use crate::errors::AppError;

pub const LOG_ENV: &str = "TRAVELZOOM_LOG";
pub const LOG_FILE_NAME: &str = "travelZoom.log";

/// Where the log goes when no `--log-file` is given.
pub fn default_log_path() -> Option<PathBuf> {
    user_cache_dir().map(|d| d.join(LOG_FILE_NAME))
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Keep the returned guard alive for the
/// whole run; dropping it flushes the writer.
pub fn init_logging(path: Option<PathBuf>) -> Result<WorkerGuard, AppError> {
    let path = path
        .or_else(default_log_path)
        .ok_or_else(|| AppError::Logging("no cache directory for the log file".to_string()))?;
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)?;
    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::Logging(format!("not a file path: {}", path.display())))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let subscriber = tracing_subscriber::registry()
        .with(filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        );
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Logging(e.to_string()))?;
    tracing_log::LogTracer::init().map_err(|e| AppError::Logging(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(guard)
}
