//! Output formatting and display system
//!
//! Burst report blocks are emitted as each burst completes; the aggregate
//! run summary is printed once at the end. Both colored and plain text
//! renditions are supported.

mod colored;
mod formatter;

pub use colored::ColoredFormatter;
pub use formatter::{FormattingOptions, OutputFormatter, PlainFormatter};

use crate::{error::Result, models::BurstResult, stats::RunStatistics};

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support and preferences
    pub fn create_formatter(enable_color: bool, verbose: bool) -> Box<dyn OutputFormatter> {
        let options = FormattingOptions {
            enable_color,
            verbose_mode: verbose,
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }

    /// Create a plain text formatter for scripts/logs
    pub fn create_plain_formatter() -> Box<dyn OutputFormatter> {
        Self::create_formatter(false, false)
    }
}

/// Main output coordinator that handles all result display
pub struct OutputCoordinator {
    formatter: Box<dyn OutputFormatter>,
}

impl OutputCoordinator {
    /// Create a new output coordinator with the specified formatter
    pub fn new(formatter: Box<dyn OutputFormatter>) -> Self {
        Self { formatter }
    }

    /// Render the report block for one completed burst
    pub fn display_burst_result(&self, result: &BurstResult) -> Result<String> {
        self.formatter.format_burst_result(result)
    }

    /// Render the aggregate summary for the whole run
    pub fn display_run_summary(
        &self,
        results: &[BurstResult],
        stats: &RunStatistics,
    ) -> Result<String> {
        self.formatter.format_run_summary(results, stats)
    }

    /// Render a warning line
    pub fn display_warning(&self, warning: &str) -> Result<String> {
        self.formatter.format_warning(warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_respects_color_flag() {
        // Both factories must produce a usable formatter; rendering details
        // are covered by the formatter tests.
        let colored = OutputFormatterFactory::create_formatter(true, false);
        let plain = OutputFormatterFactory::create_formatter(false, true);
        assert!(colored.format_header("x").is_ok());
        assert!(plain.format_header("x").is_ok());
    }
}
