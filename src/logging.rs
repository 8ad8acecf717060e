//! Logging module for debug mode
//!
//! Provides logging module that writes to a temp file
//! with timestamps when --debug is specified

use log::{debug, error, info, trace, warn};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Once;

// the TUI owns stdout, so logs can only go to a file
static INIT: Once = Once::new();

/// Name of the debug log inside the temp directory
pub const DEBUG_LOG_FILE: &str = "explorer-rs-debug.log";

/// Path the debug log is written to
pub fn debug_log_path() -> PathBuf {
    let mut log_path = std::env::temp_dir();
    log_path.push(DEBUG_LOG_FILE);
    log_path
}

/// Initializes logging module when debug mode is enabled
/// Creates a file in the temp directory and sets up logger with timestamps
pub fn init_debug_logging() -> crate::Result<PathBuf> {
    let log_path = debug_log_path();

    // Create or truncate the log file
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .map_err(|e| {
            crate::ExplorerError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to create log file {}: {}", log_path.display(), e),
            ))
        })?;

    INIT.call_once(move || {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .filter_module("crossterm", log::LevelFilter::Warn)
            .filter_module("ratatui", log::LevelFilter::Warn)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}:{} - {}",
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S.%3f UTC"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .init();
    });

    info!("Debug logging initialized to: {}", log_path.display());

    Ok(log_path)
}

/// Log a debug message if debug mode is enabled
pub fn debug_log(msg: &str) {
    debug!("{}", msg);
}

/// Log an info message if debug mode is enabled
pub fn info_log(msg: &str) {
    info!("{}", msg);
}

/// Log a warning message if debug mode is enabled
pub fn warn_log(msg: &str) {
    warn!("{}", msg);
}

/// Log an error message if debug mode is enabled
pub fn error_log(msg: &str) {
    error!("{}", msg);
}

/// Log a trace message if debug mode is enabled
pub fn trace_log(msg: &str) {
    trace!("{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_path_is_in_temp_dir() {
        let path = debug_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with(DEBUG_LOG_FILE));
    }

    #[test]
    fn test_log_helpers_without_logger() {
        // no logger installed: every helper must be a no-op
        debug_log("debug");
        info_log("info");
        warn_log("warn");
        error_log("error");
        trace_log("trace");
    }
}
