//! Error types for javacheck operations.
//!
//! This module defines [`JavaCheckError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `JavaCheckError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `JavaCheckError::Other`) for unexpected errors
//! - [`JavaVersionChecker::check`](crate::java::JavaVersionChecker::check) never
//!   returns these; it folds them into the response instead

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for javacheck operations.
#[derive(Debug, Error)]
pub enum JavaCheckError {
    /// The external command could not be started or its output read.
    #[error("Command failed to run: {command}: {message}")]
    CommandFailed { command: String, message: String },

    /// The external command did not finish in time and was killed.
    #[error("Command timed out after {timeout:?}: {command}")]
    Timeout { command: String, timeout: Duration },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values (including environment overrides).
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for javacheck operations.
pub type Result<T> = std::result::Result<T, JavaCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_and_message() {
        let err = JavaCheckError::CommandFailed {
            command: "java -version".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("java -version"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn timeout_displays_command() {
        let err = JavaCheckError::Timeout {
            command: "java -version".into(),
            timeout: Duration::from_secs(3),
        };
        let msg = err.to_string();
        assert!(msg.contains("java -version"));
        assert!(msg.contains("3s"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = JavaCheckError::ConfigNotFound {
            path: PathBuf::from("/etc/javacheck.yml"),
        };
        assert!(err.to_string().contains("/etc/javacheck.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = JavaCheckError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: JavaCheckError = io_err.into();
        assert!(matches!(err, JavaCheckError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: JavaCheckError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
