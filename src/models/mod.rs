//! Data models for configuration, bursts and measured results

pub mod config;
pub mod metrics;

pub use config::Config;
pub use metrics::{BurstConfig, BurstResult, Payload};
