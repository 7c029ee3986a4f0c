use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Error type for log setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not create log directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("log path has no file name: {0}")]
    NotAFile(PathBuf),
    #[error("could not install log subscriber: {0}")]
    Init(String),
}

/// Parse a filter directive such as `info` or `dayplan=debug`
pub fn build_filter(directive: &str) -> Result<EnvFilter, LogError> {
    Ok(EnvFilter::try_new(directive)?)
}

/// Send tracing output to `path` (appending). `RUST_LOG` overrides `level`.
///
/// The terminal belongs to the UI, so there is no stderr fallback. Keep the
/// returned guard alive until exit so buffered lines are flushed.
pub fn init(path: &Path, level: &str) -> Result<WorkerGuard, LogError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LogError::NotAFile(path.to_path_buf()))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let filter = match std::env::var("RUST_LOG") {
        Ok(env) if !env.trim().is_empty() => build_filter(&env)?,
        _ => build_filter(level)?,
    };

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| LogError::Init(e.to_string()))?;
    Ok(guard)
}
