//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        // Try to load .env from current directory
        if Path::new(".env").exists() {
            dotenv::from_filename(".env")
                .map_err(|e| AppError::config(format!("Failed to load .env file: {}", e)))?;

            if debug {
                println!("Loaded configuration from .env file");
            }
        } else if debug {
            println!("No .env file found, using defaults and CLI arguments");
        }

        Ok(())
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# Burst Bench Configuration
#
# Values specified here are used as defaults but can be overridden by
# command-line arguments.

# Target endpoint receiving the payload bursts
# BBENCH_ENDPOINT=http://localhost:8080

# Number of packets sent per burst
# BBENCH_PACKETS=1000

# Payload size in bytes before the first escalation step
# BBENCH_INITIAL_SIZE=128

# Multiplier applied to the payload size at every escalation step
# BBENCH_FACTOR=10

# Number of escalation steps (one burst per step)
# BBENCH_STEPS=4

# Content-Type header sent with every packet
# BBENCH_CONTENT_TYPE=application/octet-stream

# Packets in flight at once (1 = strict sequential baseline)
# BBENCH_CONCURRENCY=1

# Per-request timeout in seconds (0 disables it)
# BBENCH_TIMEOUT_SECONDS=0

# Enable colored output (true/false)
# BBENCH_ENABLE_COLOR=true
"#
        .to_string()
    }

    /// Save example .env file to disk
    pub fn save_example_env_file(path: &Path) -> Result<()> {
        use std::fs;

        let content = Self::create_example_env_content();
        fs::write(path, content)
            .map_err(|e| AppError::io(format!("Failed to write example .env file: {}", e)))?;

        Ok(())
    }
}
