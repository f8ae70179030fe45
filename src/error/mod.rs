//! Error handling for the burst throughput benchmark

use thiserror::Error;

/// Custom error types for the burst throughput benchmark
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (fatal at startup)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Parsing errors (URLs, numbers, etc.)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Transport-level failures: connection refused, reset, timeout
    #[error("Transport error: {0}")]
    Transport(String),

    /// Malformed or unexpected response framing
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport(message.into())
    }

    /// Create a new protocol error
    pub fn protocol<S: Into<String>>(message: S) -> Self {
        Self::Protocol(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Validation(_) => "VALIDATION",
            Self::Parse(_) => "PARSE",
            Self::Transport(_) => "TRANSPORT",
            Self::Protocol(_) => "PROTOCOL",
            Self::Io(_) => "IO",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Check if the burst loop may recover from this error locally.
    ///
    /// Recoverable errors are logged as a per-packet diagnostic and the burst
    /// continues; everything else aborts before any burst runs.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Protocol(_) => true,
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) => false,
            Self::Io(_) | Self::Internal(_) => false,
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => {
                format!("Configuration problem: {}\n\nSuggestion: Check your .env file or command line arguments.", msg)
            }
            Self::Validation(msg) => {
                format!("Invalid input: {}\n\nSuggestion: Check the format of your endpoint URL and numeric options.", msg)
            }
            Self::Parse(msg) => {
                format!("Failed to parse data: {}\n\nSuggestion: Check the format of your input values or configuration files.", msg)
            }
            Self::Transport(msg) => {
                format!("Transport failure: {}\n\nSuggestion: Check that the target service is up and reachable.", msg)
            }
            Self::Protocol(msg) => {
                format!("Malformed response: {}\n\nSuggestion: The target service may not speak plain HTTP on this port.", msg)
            }
            Self::Io(msg) => {
                format!("File operation failed: {}\n\nSuggestion: Check file permissions and disk space.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) => 1, // Invalid configuration/usage
            Self::Transport(_) => 2,                                     // Network issues
            Self::Protocol(_) => 3,                                      // Malformed responses
            Self::Io(_) | Self::Internal(_) => 5,                        // Everything else
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = AppError::config("bad endpoint");
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.category(), "CONFIG");

        let err = AppError::transport("connection reset");
        assert!(matches!(err, AppError::Transport(_)));
        assert_eq!(err.category(), "TRANSPORT");
    }

    #[test]
    fn test_recoverability() {
        assert!(AppError::transport("timeout").is_recoverable());
        assert!(AppError::protocol("truncated body").is_recoverable());
        assert!(!AppError::config("bad value").is_recoverable());
        assert!(!AppError::validation("zero packets").is_recoverable());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::config("x").exit_code(), 1);
        assert_eq!(AppError::validation("x").exit_code(), 1);
        assert_eq!(AppError::transport("x").exit_code(), 2);
        assert_eq!(AppError::protocol("x").exit_code(), 3);
        assert_eq!(AppError::internal("x").exit_code(), 5);
    }

    #[test]
    fn test_display_includes_message() {
        let err = AppError::transport("connection refused");
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }
}
