//! Core formatting traits and the plain text implementation
//!
//! The per-burst report block keeps the layout of the reference tool:
//! payload size, packet count, elapsed seconds (4 decimals), packet rate
//! in kilo-packets/s (2 decimals) and bit rate in Mbps (1 decimal).

use crate::{
    error::Result,
    models::BurstResult,
    stats::RunStatistics,
};

/// Main trait for output formatting
pub trait OutputFormatter: Send + Sync {
    /// Format a header section
    fn format_header(&self, title: &str) -> Result<String>;

    /// Format a single burst report block
    fn format_burst_result(&self, result: &BurstResult) -> Result<String>;

    /// Format the aggregate run summary
    fn format_run_summary(&self, results: &[BurstResult], stats: &RunStatistics) -> Result<String>;

    /// Format error messages
    fn format_error(&self, error: &str) -> Result<String>;

    /// Format warning messages
    fn format_warning(&self, warning: &str) -> Result<String>;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Enable verbose mode with detailed information
    pub verbose_mode: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose_mode: false,
        }
    }
}

/// Plain text formatter implementation
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();
        output.push_str(title);
        output.push('\n');
        output.push_str(&"=".repeat(title.len()));
        Ok(output)
    }

    fn format_burst_result(&self, result: &BurstResult) -> Result<String> {
        let mut output = String::new();

        output.push_str("=======================\n");
        output.push_str(&format!("packet size {} Bytes:\n", result.payload_size_bytes));
        output.push_str("=========================\n");
        output.push_str(&format!(
            "Sent and received {} packets in {:.4} seconds\n",
            result.packet_count,
            result.elapsed_secs()
        ));

        match result.kilo_packet_rate() {
            Some(rate) => {
                output.push_str(&format!("Packet rate {:.2} kilo packets/s\n", rate));
            }
            None => output.push_str("Packet rate N/A\n"),
        }

        match result.megabit_rate() {
            Some(rate) => {
                output.push_str(&format!("Bit rate {:.1}  Mbps\n", rate));
            }
            None => output.push_str("Bit rate N/A\n"),
        }

        if self.options.verbose_mode && result.failed_packets > 0 {
            output.push_str(&format!(
                "({} of {} attempts failed)\n",
                result.failed_packets, result.packet_count
            ));
        }

        Ok(output)
    }

    fn format_run_summary(&self, results: &[BurstResult], stats: &RunStatistics) -> Result<String> {
        let mut output = String::new();

        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str("Run Summary:\n");
        output.push_str(&format!("  Bursts completed: {}\n", stats.burst_count));
        output.push_str(&format!("  Packets attempted: {}\n", stats.total_attempted));
        output.push_str(&format!("  Packets succeeded: {}\n", stats.total_successful));
        output.push_str(&format!("  Packets failed: {}\n", stats.total_failed));
        output.push_str(&format!("  Success rate: {:.1}%\n", stats.success_rate));
        output.push_str(&format!(
            "  Payload bytes attempted: {}\n",
            stats.total_bytes_attempted
        ));
        output.push_str(&format!(
            "  Cumulative burst time: {:.4} seconds\n",
            stats.total_elapsed.as_secs_f64()
        ));

        if let (Some(size), Some(rate)) = (stats.best_burst_payload_bytes, stats.best_bit_rate_bps)
        {
            output.push_str(&format!(
                "  Best bit rate: {:.1} Mbps at {} byte payloads\n",
                rate / 1e6,
                size
            ));
        }

        if self.options.verbose_mode {
            output.push_str("  Per-burst success rates:\n");
            for result in results {
                output.push_str(&format!(
                    "    {} bytes: {}/{} ({:.1}%)\n",
                    result.payload_size_bytes,
                    result.successful_packets,
                    result.packet_count,
                    result.success_rate()
                ));
            }
        }

        Ok(output)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("ERROR: {}", error))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("WARNING: {}", warning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BurstConfig;
    use chrono::Utc;
    use std::time::Duration;

    fn sample_result() -> BurstResult {
        let burst = BurstConfig::new(
            1280,
            1000,
            "http://localhost:8080".to_string(),
            "application/octet-stream".to_string(),
        );
        BurstResult::compute(&burst, Duration::from_secs_f64(0.5), 1000, 0, Utc::now())
    }

    #[test]
    fn test_burst_block_layout() {
        let formatter = PlainFormatter::new(FormattingOptions::default());
        let block = formatter.format_burst_result(&sample_result()).unwrap();

        assert!(block.contains("packet size 1280 Bytes:"));
        assert!(block.contains("Sent and received 1000 packets in 0.5000 seconds"));
        assert!(block.contains("Packet rate 2.00 kilo packets/s"));
        assert!(block.contains("Bit rate 20.5  Mbps"));
    }

    #[test]
    fn test_undefined_rates_render_as_na() {
        let burst = BurstConfig::new(
            1280,
            1000,
            "http://localhost:8080".to_string(),
            "application/octet-stream".to_string(),
        );
        let result = BurstResult::compute(&burst, Duration::ZERO, 0, 0, Utc::now());

        let formatter = PlainFormatter::new(FormattingOptions::default());
        let block = formatter.format_burst_result(&result).unwrap();
        assert!(block.contains("Packet rate N/A"));
        assert!(block.contains("Bit rate N/A"));
    }

    #[test]
    fn test_run_summary_contains_totals() {
        let results = vec![sample_result()];
        let stats = RunStatistics::from_results(&results);
        let formatter = PlainFormatter::new(FormattingOptions::default());
        let summary = formatter.format_run_summary(&results, &stats).unwrap();

        assert!(summary.contains("Packets attempted: 1000"));
        assert!(summary.contains("Success rate: 100.0%"));
    }
}
