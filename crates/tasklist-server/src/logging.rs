// Rust guideline compliant 2026-10-16

//! Tracing subscriber setup.

use crate::error::ServerError;
use std::fs::OpenOptions;
use std::path::Path;
use tasklist_core::LogFormat;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Installs the global subscriber.
///
/// Logs go to `log_file` when given, otherwise to stderr. The returned guard
/// must be held for the lifetime of the process so buffered lines are flushed.
///
/// # Errors
///
/// Returns an error if the level is unknown or the log file cannot be opened.
pub fn init_tracing(
    level: &str,
    format: LogFormat,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>, ServerError> {
    let level = parse_log_level(level)?;

    let (writer, guard) = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = fmt().with_max_level(level).with_target(false).with_writer(writer);
    let _ = match format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
        LogFormat::Plain => tracing::subscriber::set_global_default(builder.finish()),
    };
    Ok(guard)
}

/// Parses a level name, case-insensitively.
///
/// # Errors
///
/// Returns [`ServerError::InvalidLogLevel`] for anything else.
pub fn parse_log_level(level: &str) -> Result<Level, ServerError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(ServerError::InvalidLogLevel(other.to_string())),
    }
}
