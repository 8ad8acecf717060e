//! Error handling.
//!
//! This module provides a custom error type for the explorer.

use colored::*;
use std::fmt;

/// Result type alias for the explorer application.
pub type Result<T> = std::result::Result<T, ExplorerError>;

/// Main error type for the explorer application.
#[derive(Debug)]
pub enum ExplorerError {
    /// IO error.
    IoError(std::io::Error),

    /// TUI rendering error.
    TuiError(String),

    /// Input validation error.
    InvalidInput(String),

    /// Search text that does not compile to a regular expression.
    InvalidPattern { pattern: String, reason: String },

    /// Terminal related error.
    TerminalError(String),

    /// Catalog file could not be read or parsed.
    CatalogError { path: String, reason: String },
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message().red().bold())
    }
}

impl ExplorerError {
    fn message(&self) -> String {
        match self {
            ExplorerError::IoError(err) => format!("IO error: {}", err),
            ExplorerError::TuiError(err) => format!("TUI error: {}", err),
            ExplorerError::InvalidInput(err) => format!("Invalid input: {}", err),
            ExplorerError::InvalidPattern { pattern, reason } => {
                format!("Invalid search pattern: {}\n reason: {}", pattern, reason)
            }
            ExplorerError::TerminalError(err) => format!(
                "Terminal error: {}\n Try running in a proper terminal.",
                err
            ),
            ExplorerError::CatalogError { path, reason } => {
                format!("Catalog error: Path: {}\n Reason: {}", path, reason)
            }
        }
    }
}

impl std::error::Error for ExplorerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExplorerError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExplorerError {
    fn from(err: std::io::Error) -> Self {
        ExplorerError::IoError(err)
    }
}

impl From<serde_json::Error> for ExplorerError {
    fn from(err: serde_json::Error) -> Self {
        ExplorerError::CatalogError {
            path: "<inline>".to_string(),
            reason: err.to_string(),
        }
    }
}

impl ExplorerError {
    /// Create a terminal error with context
    pub fn terminal_error(err: &str) -> Self {
        ExplorerError::TerminalError(err.to_string())
    }

    /// Create a catalog error for a given path
    pub fn catalog_error(path: &str, reason: &str) -> Self {
        ExplorerError::CatalogError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a invalid pattern error
    pub fn invalid_pattern(pattern: &str, reason: &str) -> Self {
        ExplorerError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Check if the explorer can keep running after this error
    pub fn is_recoverable(&self) -> bool {
        match self {
            ExplorerError::InvalidInput(_) => true,
            ExplorerError::InvalidPattern { .. } => true,
            ExplorerError::CatalogError { .. } => false,
            ExplorerError::TerminalError(_) => false,
            ExplorerError::IoError(_) => false,
            ExplorerError::TuiError(_) => false,
        }
    }

    /// Get user-friendly recovery suggestion
    pub fn get_recovery_suggestion(&self) -> Option<String> {
        match self {
            ExplorerError::InvalidInput(..) => {
                Some("Please check your input and try again.".to_string())
            }
            ExplorerError::InvalidPattern { .. } => {
                Some("Keep typing or balance brackets and parentheses.".to_string())
            }
            ExplorerError::CatalogError { .. } => Some(
                "Check that the catalog is JSON with \"components\" and \"apis\" arrays."
                    .to_string(),
            ),
            _ => None,
        }
    }

    /// Message without terminal colors, for drawing inside the TUI
    pub fn plain_message(&self) -> String {
        match self {
            ExplorerError::InvalidPattern { pattern, reason } => {
                let reason = reason.lines().last().unwrap_or(reason).trim();
                format!("Invalid search pattern `{}`: {}", pattern, reason)
            }
            other => other.message().replace('\n', " "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExplorerError::InvalidInput("input test error".to_string());
        assert!(err.to_string().contains("Invalid input:"));
        assert!(err.to_string().contains("input test error"));

        let err = ExplorerError::InvalidPattern {
            pattern: "[".to_string(),
            reason: "unclosed character class".to_string(),
        };
        assert!(err.to_string().contains("Invalid search pattern:"));
        assert!(err.to_string().contains("reason:"));

        let err = ExplorerError::TerminalError("terminal test error".to_string());
        assert!(err.to_string().contains("Terminal error:"));
        assert!(err
            .to_string()
            .contains("Try running in a proper terminal."));

        let err = ExplorerError::CatalogError {
            path: "/catalog.json".to_string(),
            reason: "missing field".to_string(),
        };
        assert!(err.to_string().contains("Catalog error:"));
        assert!(err.to_string().contains("Path:"));
        assert!(err.to_string().contains("Reason:"));
    }

    #[test]
    fn test_error_helper_functions() {
        let err = ExplorerError::invalid_pattern("(", "unclosed group");
        assert!(matches!(err, ExplorerError::InvalidPattern { .. }));

        let err = ExplorerError::terminal_error("terminal error");
        assert!(matches!(err, ExplorerError::TerminalError(_)));

        let err = ExplorerError::catalog_error("/path/to/catalog.json", "not found");
        assert!(matches!(err, ExplorerError::CatalogError { .. }));
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(ExplorerError::InvalidInput("input error".to_string()).is_recoverable());
        assert!(ExplorerError::invalid_pattern("[", "reason").is_recoverable());

        assert!(!ExplorerError::catalog_error("/path", "reason").is_recoverable());
        assert!(!ExplorerError::TerminalError("terminal error".to_string()).is_recoverable());
        assert!(
            !ExplorerError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "io error"))
                .is_recoverable()
        );
        assert!(!ExplorerError::TuiError("tui error".to_string()).is_recoverable());
    }

    #[test]
    fn test_recovery_suggestion() {
        let err = ExplorerError::InvalidInput("input error".to_string());
        assert_eq!(
            err.get_recovery_suggestion().unwrap(),
            "Please check your input and try again."
        );

        let err = ExplorerError::invalid_pattern("[", "reason");
        assert_eq!(
            err.get_recovery_suggestion().unwrap(),
            "Keep typing or balance brackets and parentheses."
        );

        let err = ExplorerError::catalog_error("/path", "reason");
        assert!(err.get_recovery_suggestion().is_some());

        // Errors without recovery suggestion
        let err = ExplorerError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "io error"));
        assert!(err.get_recovery_suggestion().is_none());

        let err = ExplorerError::TuiError("tui error".to_string());
        assert!(err.get_recovery_suggestion().is_none());
    }

    #[test]
    fn test_serde_error_becomes_catalog_error() {
        let err: ExplorerError = serde_json::from_str::<Vec<String>>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ExplorerError::CatalogError { .. }));
    }

    #[test]
    fn test_plain_message_keeps_last_reason_line() {
        let err = ExplorerError::invalid_pattern("[", "regex parse error:\n    [\n    ^\nerror: unclosed character class");
        let msg = err.plain_message();
        assert_eq!(msg, "Invalid search pattern `[`: error: unclosed character class");

        let err = ExplorerError::TuiError("draw failed".to_string());
        assert_eq!(err.plain_message(), "TUI error: draw failed");
    }
}
