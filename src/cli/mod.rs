//! Command-line interface

use clap::Parser;

/// Burst Bench - throughput benchmarking with escalating payload bursts
#[derive(Parser, Debug, Clone)]
#[command(name = "bbench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target endpoint receiving the payload bursts
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Number of packets sent per burst
    #[arg(short, long)]
    pub packets: Option<u32>,

    /// Payload size in bytes before the first escalation step
    #[arg(long = "initial-size")]
    pub initial_size: Option<u64>,

    /// Multiplier applied to the payload size at every escalation step
    #[arg(long)]
    pub factor: Option<u64>,

    /// Number of escalation steps (one burst per step)
    #[arg(long)]
    pub steps: Option<u32>,

    /// Content-Type header sent with every packet
    #[arg(long = "content-type")]
    pub content_type: Option<String>,

    /// Packets in flight at once (1 = strict sequential baseline)
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds (0 disables it)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write a commented .env.example template to the current directory and exit
    #[arg(long = "init-env")]
    pub init_env: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting color flags
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true // Force color output when --color is specified
        } else if self.no_color {
            false // Disable color output when --no-color is specified
        } else {
            supports_color() // Use automatic detection
        }
    }

    /// Get configuration summary for display
    pub fn get_config_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("CLI overrides:\n");
        if let Some(ref endpoint) = self.endpoint {
            summary.push_str(&format!("  Endpoint: {}\n", endpoint));
        }
        if let Some(packets) = self.packets {
            summary.push_str(&format!("  Packets per burst: {}\n", packets));
        }
        if let Some(initial_size) = self.initial_size {
            summary.push_str(&format!("  Initial payload: {} bytes\n", initial_size));
        }
        if let Some(factor) = self.factor {
            summary.push_str(&format!("  Escalation factor: {}\n", factor));
        }
        if let Some(steps) = self.steps {
            summary.push_str(&format!("  Escalation steps: {}\n", steps));
        }
        if let Some(ref content_type) = self.content_type {
            summary.push_str(&format!("  Content type: {}\n", content_type));
        }
        if let Some(concurrency) = self.concurrency {
            summary.push_str(&format!("  Concurrency: {}\n", concurrency));
        }
        if let Some(timeout) = self.timeout {
            summary.push_str(&format!("  Timeout: {}s\n", timeout));
        }
        summary.push_str(&format!("  Colored output: {}\n", self.use_colors()));
        summary.push_str(&format!("  Verbose mode: {}\n", self.verbose));
        summary.push_str(&format!("  Debug mode: {}\n", self.debug));

        summary
    }
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    // Check for common environment variables that indicate color support
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check for NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for FORCE_COLOR environment variable
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Default to true on Unix-like systems, false elsewhere
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
