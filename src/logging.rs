//! Diagnostic logging for the benchmark run
//!
//! Per-packet failures and lifecycle events are logged to stderr so the
//! report blocks on stdout stay clean. Every run carries a correlation ID
//! for matching diagnostics across bursts.

use crate::error::{AppError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Debug level - detailed information for debugging
    Debug = 0,
    /// Info level - general application information
    Info = 1,
    /// Warning level - potentially harmful situations
    Warn = 2,
    /// Error level - error events but application can continue
    Error = 3,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Get ANSI color code for console output
    pub fn color_code(&self) -> &'static str {
        match self {
            LogLevel::Debug => "\x1b[36m", // Cyan
            LogLevel::Info => "\x1b[32m",  // Green
            LogLevel::Warn => "\x1b[33m",  // Yellow
            LogLevel::Error => "\x1b[31m", // Red
        }
    }

    /// Reset ANSI color code
    pub fn reset_code() -> &'static str {
        "\x1b[0m"
    }
}

impl std::str::FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(AppError::parse(format!("Invalid log level: {}", s))),
        }
    }
}

/// Stderr logger with level filtering and a per-run correlation ID
#[derive(Debug, Clone)]
pub struct Logger {
    /// Minimum log level to output
    min_level: LogLevel,
    /// Whether to use colored output
    use_color: bool,
    /// Logger name/component
    name: String,
    /// Correlation ID shared by every line of this run
    run_id: Uuid,
}

impl Logger {
    /// Create a new logger for the given component
    pub fn new(name: &str, min_level: LogLevel, use_color: bool) -> Self {
        Self {
            min_level,
            use_color,
            name: name.to_string(),
            run_id: Uuid::new_v4(),
        }
    }

    /// Derive a logger for another component sharing this run's ID
    pub fn component(&self, name: &str) -> Self {
        Self {
            min_level: self.min_level,
            use_color: self.use_color,
            name: name.to_string(),
            run_id: self.run_id,
        }
    }

    /// The correlation ID for this run
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Emit a log line at the given level
    pub fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");

        if self.use_color {
            eprintln!(
                "{} {}{}{} [{}] [{}] {}",
                timestamp,
                level.color_code(),
                level.as_str(),
                LogLevel::reset_code(),
                self.name,
                short_id(&self.run_id),
                message
            );
        } else {
            eprintln!(
                "{} {} [{}] [{}] {}",
                timestamp,
                level.as_str(),
                self.name,
                short_id(&self.run_id),
                message
            );
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// First UUID segment, enough to correlate lines within one run
fn short_id(id: &Uuid) -> String {
    id.to_string()
        .split('-')
        .next()
        .unwrap_or_default()
        .to_string()
}
