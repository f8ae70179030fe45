//! Configuration data model and validation

use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target endpoint receiving the payload bursts
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Payload size in bytes before the first escalation step
    #[serde(default = "default_initial_payload_bytes")]
    pub initial_payload_bytes: u64,

    /// Multiplier applied to the payload size at every escalation step
    #[serde(default = "default_escalation_factor")]
    pub escalation_factor: u64,

    /// Number of escalation steps (one burst per step)
    #[serde(default = "default_escalation_steps")]
    pub escalation_steps: u32,

    /// Number of packets sent per burst
    #[serde(default = "default_packets_per_burst")]
    pub packets_per_burst: u32,

    /// Content-Type header sent with every packet
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Number of packets in flight at once (1 = strict sequential baseline)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Per-request timeout in seconds (0 disables it, leaving the
    /// transport's own defaults in charge)
    #[serde(default = "default_timeout_secs")]
    pub timeout_seconds: u64,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            initial_payload_bytes: default_initial_payload_bytes(),
            escalation_factor: default_escalation_factor(),
            escalation_steps: default_escalation_steps(),
            packets_per_burst: default_packets_per_burst(),
            content_type: default_content_type(),
            concurrency: default_concurrency(),
            timeout_seconds: default_timeout_secs(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the per-request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_seconds == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_seconds))
        }
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(AppError::config("Endpoint URL cannot be empty"));
        }

        match url::Url::parse(&self.endpoint) {
            Ok(parsed) => {
                if parsed.scheme() != "http" && parsed.scheme() != "https" {
                    return Err(AppError::config(format!(
                        "Endpoint must use http or https: {}",
                        self.endpoint
                    )));
                }
                if parsed.host_str().is_none() {
                    return Err(AppError::config(format!(
                        "Endpoint must have a host: {}",
                        self.endpoint
                    )));
                }
            }
            Err(e) => {
                return Err(AppError::config(format!(
                    "Invalid endpoint URL '{}': {}",
                    self.endpoint, e
                )));
            }
        }

        if self.initial_payload_bytes == 0 {
            return Err(AppError::config("Initial payload size must be greater than 0"));
        }

        if self.escalation_factor == 0 {
            return Err(AppError::config("Escalation factor must be greater than 0"));
        }

        if self.escalation_steps == 0 {
            return Err(AppError::config("Escalation steps must be greater than 0"));
        }

        if self.escalation_steps > 16 {
            return Err(AppError::config("Escalation steps cannot exceed 16"));
        }

        if self.packets_per_burst == 0 {
            return Err(AppError::config("Packets per burst must be greater than 0"));
        }

        if self.content_type.is_empty() {
            return Err(AppError::config("Content type cannot be empty"));
        }

        if self.concurrency == 0 {
            return Err(AppError::config("Concurrency must be at least 1"));
        }

        if self.concurrency > 1024 {
            return Err(AppError::config("Concurrency cannot exceed 1024"));
        }

        if self.timeout_seconds > 300 {
            return Err(AppError::config("Timeout cannot exceed 300 seconds"));
        }

        // Reject schedules that would overflow before any burst runs
        self.escalation_schedule()?;

        Ok(())
    }

    /// Compute the geometric escalation schedule of payload sizes.
    ///
    /// The size is multiplied by the factor *before* each burst, so with the
    /// defaults (128, factor 10, 4 steps) the schedule is
    /// 1280, 12800, 128000, 1280000 bytes.
    pub fn escalation_schedule(&self) -> Result<Vec<u64>> {
        let mut sizes = Vec::with_capacity(self.escalation_steps as usize);
        let mut size = self.initial_payload_bytes;

        for step in 1..=self.escalation_steps {
            size = size.checked_mul(self.escalation_factor).ok_or_else(|| {
                AppError::config(format!(
                    "Escalation schedule overflows at step {} (initial {} bytes, factor {})",
                    step, self.initial_payload_bytes, self.escalation_factor
                ))
            })?;
            sizes.push(size);
        }

        Ok(sizes)
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(endpoint) = std::env::var("BBENCH_ENDPOINT") {
            self.endpoint = endpoint.trim().to_string();
        }

        if let Ok(packets) = std::env::var("BBENCH_PACKETS") {
            self.packets_per_burst = packets.parse().map_err(|e| {
                AppError::config(format!("Invalid BBENCH_PACKETS value '{}': {}", packets, e))
            })?;
        }

        if let Ok(initial) = std::env::var("BBENCH_INITIAL_SIZE") {
            self.initial_payload_bytes = initial.parse().map_err(|e| {
                AppError::config(format!("Invalid BBENCH_INITIAL_SIZE value '{}': {}", initial, e))
            })?;
        }

        if let Ok(factor) = std::env::var("BBENCH_FACTOR") {
            self.escalation_factor = factor.parse().map_err(|e| {
                AppError::config(format!("Invalid BBENCH_FACTOR value '{}': {}", factor, e))
            })?;
        }

        if let Ok(steps) = std::env::var("BBENCH_STEPS") {
            self.escalation_steps = steps.parse().map_err(|e| {
                AppError::config(format!("Invalid BBENCH_STEPS value '{}': {}", steps, e))
            })?;
        }

        if let Ok(content_type) = std::env::var("BBENCH_CONTENT_TYPE") {
            self.content_type = content_type.trim().to_string();
        }

        if let Ok(concurrency) = std::env::var("BBENCH_CONCURRENCY") {
            self.concurrency = concurrency.parse().map_err(|e| {
                AppError::config(format!("Invalid BBENCH_CONCURRENCY value '{}': {}", concurrency, e))
            })?;
        }

        if let Ok(timeout) = std::env::var("BBENCH_TIMEOUT_SECONDS") {
            self.timeout_seconds = timeout.parse().map_err(|e| {
                AppError::config(format!("Invalid BBENCH_TIMEOUT_SECONDS value '{}': {}", timeout, e))
            })?;
        }

        if let Ok(enable_color) = std::env::var("BBENCH_ENABLE_COLOR") {
            self.enable_color = enable_color.parse().map_err(|e| {
                AppError::config(format!("Invalid BBENCH_ENABLE_COLOR value '{}': {}", enable_color, e))
            })?;
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_endpoint() -> String {
    crate::defaults::DEFAULT_ENDPOINT.to_string()
}

fn default_initial_payload_bytes() -> u64 {
    crate::defaults::DEFAULT_INITIAL_PAYLOAD_BYTES
}

fn default_escalation_factor() -> u64 {
    crate::defaults::DEFAULT_ESCALATION_FACTOR
}

fn default_escalation_steps() -> u32 {
    crate::defaults::DEFAULT_ESCALATION_STEPS
}

fn default_packets_per_burst() -> u32 {
    crate::defaults::DEFAULT_PACKETS_PER_BURST
}

fn default_content_type() -> String {
    crate::defaults::DEFAULT_CONTENT_TYPE.to_string()
}

fn default_concurrency() -> usize {
    crate::defaults::DEFAULT_CONCURRENCY
}

fn default_timeout_secs() -> u64 {
    crate::defaults::DEFAULT_TIMEOUT_SECONDS
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_values_match_reference() {
        let config = Config::default();
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert_eq!(config.initial_payload_bytes, 128);
        assert_eq!(config.escalation_factor, 10);
        assert_eq!(config.escalation_steps, 4);
        assert_eq!(config.packets_per_burst, 1000);
        assert_eq!(config.content_type, "application/octet-stream");
        assert_eq!(config.concurrency, 1);
    }

    #[test]
    fn test_empty_endpoint_invalid() {
        let mut config = Config::default();
        config.endpoint = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_endpoint_format() {
        let mut config = Config::default();
        config.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_endpoint_invalid() {
        let mut config = Config::default();
        config.endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_packets_invalid() {
        let mut config = Config::default();
        config.packets_per_burst = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_initial_size_invalid() {
        let mut config = Config::default();
        config.initial_payload_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_concurrency_invalid() {
        let mut config = Config::default();
        config.concurrency = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_escalation_schedule_geometric() {
        let config = Config::default();
        let schedule = config.escalation_schedule().unwrap();
        assert_eq!(schedule, vec![1280, 12800, 128000, 1280000]);
    }

    #[test]
    fn test_escalation_schedule_custom_factor() {
        let mut config = Config::default();
        config.initial_payload_bytes = 64;
        config.escalation_factor = 2;
        config.escalation_steps = 3;
        let schedule = config.escalation_schedule().unwrap();
        assert_eq!(schedule, vec![128, 256, 512]);
    }

    #[test]
    fn test_escalation_schedule_overflow_rejected() {
        let mut config = Config::default();
        config.initial_payload_bytes = u64::MAX / 2;
        config.escalation_factor = 10;
        config.escalation_steps = 2;
        assert!(config.escalation_schedule().is_err());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timeout_zero_means_disabled() {
        let mut config = Config::default();
        config.timeout_seconds = 0;
        assert!(config.timeout().is_none());
        config.timeout_seconds = 5;
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }
}
