//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::Cli,
    config::env::EnvManager,
    error::Result,
    models::Config,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        // Start with default configuration; terminal color detection is
        // part of the baseline so the env and CLI layers can override it
        let mut config = Config::default();
        config.enable_color = self.cli.use_colors();

        // Load from environment file if it exists
        self.load_env_file()?;

        // Merge environment variables into config
        config.merge_from_env()?;

        // Override with CLI arguments
        self.apply_cli_overrides(&mut config);

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Load .env file if it exists
    fn load_env_file(&self) -> Result<()> {
        EnvManager::load_env_file(self.cli.debug)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(ref endpoint) = self.cli.endpoint {
            config.endpoint = endpoint.clone();
        }

        if let Some(packets) = self.cli.packets {
            config.packets_per_burst = packets;
        }

        if let Some(initial_size) = self.cli.initial_size {
            config.initial_payload_bytes = initial_size;
        }

        if let Some(factor) = self.cli.factor {
            config.escalation_factor = factor;
        }

        if let Some(steps) = self.cli.steps {
            config.escalation_steps = steps;
        }

        if let Some(ref content_type) = self.cli.content_type {
            config.content_type = content_type.clone();
        }

        if let Some(concurrency) = self.cli.concurrency {
            config.concurrency = concurrency;
        }

        if let Some(timeout) = self.cli.timeout {
            config.timeout_seconds = timeout;
        }

        // Explicit color flags win over the env layer; without a flag the
        // merged value (env var or detection baseline) stands
        if self.cli.no_color {
            config.enable_color = false;
        } else if self.cli.color {
            config.enable_color = true;
        }

        // Verbose and debug are CLI-only
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        if config.debug {
            println!("Applied CLI overrides to configuration");
            if let Ok(rendered) = serde_json::to_string_pretty(config) {
                println!("Final configuration:\n{}", rendered);
            }
        }
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    let parser = ConfigParser::new(cli);
    parser.parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Endpoint: {}", config.endpoint));
    summary.push(format!("Packets per burst: {}", config.packets_per_burst));
    summary.push(format!("Initial payload: {} bytes", config.initial_payload_bytes));
    summary.push(format!("Escalation factor: {}", config.escalation_factor));
    summary.push(format!("Escalation steps: {}", config.escalation_steps));
    summary.push(format!("Content type: {}", config.content_type));
    summary.push(format!("Concurrency: {}", config.concurrency));
    summary.push(format!("Timeout: {}s", config.timeout_seconds));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides_take_precedence() {
        let cli = Cli::parse_from([
            "bbench",
            "--endpoint",
            "http://127.0.0.1:9000",
            "--packets",
            "25",
            "--steps",
            "2",
            "--no-color",
        ]);

        let parser = ConfigParser::new(cli);
        let mut config = Config::default();
        parser.apply_cli_overrides(&mut config);

        assert_eq!(config.endpoint, "http://127.0.0.1:9000");
        assert_eq!(config.packets_per_burst, 25);
        assert_eq!(config.escalation_steps, 2);
        assert!(!config.enable_color);
    }

    #[test]
    fn test_unset_flags_keep_defaults() {
        let cli = Cli::parse_from(["bbench", "--no-color"]);
        let parser = ConfigParser::new(cli);
        let mut config = Config::default();
        parser.apply_cli_overrides(&mut config);

        assert_eq!(config.endpoint, crate::defaults::DEFAULT_ENDPOINT);
        assert_eq!(
            config.packets_per_burst,
            crate::defaults::DEFAULT_PACKETS_PER_BURST
        );
        assert_eq!(config.concurrency, crate::defaults::DEFAULT_CONCURRENCY);
    }

    #[test]
    fn test_env_merged_color_survives_cli_merge_without_flags() {
        // Simulates BBENCH_ENABLE_COLOR=false already merged: with neither
        // --color nor --no-color the merged value must stand
        let cli = Cli::parse_from(["bbench"]);
        let parser = ConfigParser::new(cli);
        let mut config = Config::default();
        config.enable_color = false;
        parser.apply_cli_overrides(&mut config);
        assert!(!config.enable_color);
    }

    #[test]
    fn test_color_flag_overrides_env_merged_value() {
        let cli = Cli::parse_from(["bbench", "--color"]);
        let parser = ConfigParser::new(cli);
        let mut config = Config::default();
        config.enable_color = false;
        parser.apply_cli_overrides(&mut config);
        assert!(config.enable_color);
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let cli = Cli::parse_from(["bbench", "--endpoint", "not-a-url", "--no-color"]);
        let parser = ConfigParser::new(cli);
        assert!(parser.parse().is_err());
    }

    #[test]
    fn test_display_config_summary_mentions_schedule_knobs() {
        let summary = display_config_summary(&Config::default());
        assert!(summary.contains("Escalation factor: 10"));
        assert!(summary.contains("Escalation steps: 4"));
    }
}
