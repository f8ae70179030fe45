//! Burst Bench
//!
//! A throughput benchmarking tool that measures a request/response service
//! under escalating payload sizes: for each size on a geometric schedule it
//! issues a timed burst of POST requests carrying a fixed-size binary body
//! and reports packet rate and bit rate.

pub mod cli;
pub mod client;
pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use client::{HttpExchange, HttpTransport, SendRequest, Transport};
pub use driver::BenchmarkDriver;
pub use error::{AppError, Result};
pub use models::{BurstConfig, BurstResult, Config, Payload};
pub use output::{ColoredFormatter, OutputCoordinator, OutputFormatter, OutputFormatterFactory, PlainFormatter};
pub use stats::RunStatistics;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    /// Byte value every payload buffer is filled with
    pub const PAYLOAD_SENTINEL: u8 = 0x0A;

    pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";
    pub const DEFAULT_INITIAL_PAYLOAD_BYTES: u64 = 128;
    pub const DEFAULT_ESCALATION_FACTOR: u64 = 10;
    pub const DEFAULT_ESCALATION_STEPS: u32 = 4;
    pub const DEFAULT_PACKETS_PER_BURST: u32 = 1000;
    pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
    pub const DEFAULT_CONCURRENCY: usize = 1;
    /// 0 leaves the transport's own timeout defaults in charge
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 0;
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
