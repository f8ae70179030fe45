//! Colored formatter implementation with terminal color support

use super::formatter::{FormattingOptions, OutputFormatter};
use crate::{
    error::Result,
    models::BurstResult,
    stats::RunStatistics,
};
use colored::*;

/// Colored formatter implementation
pub struct ColoredFormatter {
    options: FormattingOptions,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();
        output.push_str(&title.blue().bold().to_string());
        output.push('\n');
        output.push_str(&"=".repeat(title.len()).bright_black().to_string());
        Ok(output)
    }

    fn format_burst_result(&self, result: &BurstResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&"=======================\n".bright_black().to_string());
        output.push_str(&format!(
            "packet size {} Bytes:\n",
            result.payload_size_bytes.to_string().cyan().bold()
        ));
        output.push_str(&"=========================\n".bright_black().to_string());
        output.push_str(&format!(
            "Sent and received {} packets in {} seconds\n",
            result.packet_count.to_string().bold(),
            format!("{:.4}", result.elapsed_secs()).bold()
        ));

        match result.kilo_packet_rate() {
            Some(rate) => {
                output.push_str(&format!(
                    "Packet rate {} kilo packets/s\n",
                    format!("{:.2}", rate).green().bold()
                ));
            }
            None => output.push_str(&format!("Packet rate {}\n", "N/A".yellow())),
        }

        match result.megabit_rate() {
            Some(rate) => {
                output.push_str(&format!(
                    "Bit rate {}  Mbps\n",
                    format!("{:.1}", rate).green().bold()
                ));
            }
            None => output.push_str(&format!("Bit rate {}\n", "N/A".yellow())),
        }

        if self.options.verbose_mode && result.failed_packets > 0 {
            output.push_str(
                &format!(
                    "({} of {} attempts failed)\n",
                    result.failed_packets, result.packet_count
                )
                .red()
                .to_string(),
            );
        }

        Ok(output)
    }

    fn format_run_summary(&self, results: &[BurstResult], stats: &RunStatistics) -> Result<String> {
        let mut output = String::new();

        output.push_str(&"=".repeat(40).bright_black().to_string());
        output.push('\n');
        output.push_str(&"Run Summary:\n".blue().bold().to_string());
        output.push_str(&format!("  Bursts completed: {}\n", stats.burst_count));
        output.push_str(&format!("  Packets attempted: {}\n", stats.total_attempted));
        output.push_str(&format!(
            "  Packets succeeded: {}\n",
            stats.total_successful.to_string().green()
        ));

        let failed = stats.total_failed.to_string();
        output.push_str(&format!(
            "  Packets failed: {}\n",
            if stats.total_failed > 0 {
                failed.red().to_string()
            } else {
                failed
            }
        ));

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
                "  Best bit rate: {} Mbps at {} byte payloads\n",
                format!("{:.1}", rate / 1e6).green().bold(),
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
        Ok(format!("{} {}", "ERROR:".red().bold(), error))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("{} {}", "WARNING:".yellow().bold(), warning))
    }
}
