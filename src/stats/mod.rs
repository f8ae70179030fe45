//! Aggregation of burst results across a full run

use crate::models::BurstResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Aggregate statistics across all bursts of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Number of bursts executed
    pub burst_count: u32,
    /// Packets attempted across all bursts
    pub total_attempted: u64,
    /// Packets that completed an exchange
    pub total_successful: u64,
    /// Packets that failed at the transport or protocol level
    pub total_failed: u64,
    /// Payload bytes attempted across all bursts
    pub total_bytes_attempted: u64,
    /// Cumulative burst time (excludes setup between bursts)
    pub total_elapsed: Duration,
    /// Overall success rate as a percentage of attempts
    pub success_rate: f64,
    /// Payload size of the burst with the highest bit rate, if any rate
    /// was defined
    pub best_burst_payload_bytes: Option<u64>,
    /// Highest bit rate observed, in bits per second
    pub best_bit_rate_bps: Option<f64>,
}

impl RunStatistics {
    /// Aggregate a slice of burst results
    pub fn from_results(results: &[BurstResult]) -> Self {
        let total_attempted: u64 = results.iter().map(|r| r.packet_count as u64).sum();
        let total_successful: u64 = results.iter().map(|r| r.successful_packets as u64).sum();
        let total_failed: u64 = results.iter().map(|r| r.failed_packets as u64).sum();
        let total_bytes_attempted: u64 = results.iter().map(|r| r.bytes_attempted()).sum();
        let total_elapsed: Duration = results.iter().map(|r| r.elapsed).sum();

        let success_rate = if total_attempted == 0 {
            0.0
        } else {
            (total_successful as f64 / total_attempted as f64) * 100.0
        };

        let best = results
            .iter()
            .filter_map(|r| r.bit_rate_bps.map(|rate| (r.payload_size_bytes, rate)))
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        Self {
            burst_count: results.len() as u32,
            total_attempted,
            total_successful,
            total_failed,
            total_bytes_attempted,
            total_elapsed,
            success_rate,
            best_burst_payload_bytes: best.map(|(size, _)| size),
            best_bit_rate_bps: best.map(|(_, rate)| rate),
        }
    }

    /// Check if any packet failed during the run
    pub fn has_failures(&self) -> bool {
        self.total_failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BurstConfig;
    use chrono::Utc;

    fn result(size: u64, count: u32, successful: u32, elapsed_secs: f64) -> BurstResult {
        let burst = BurstConfig::new(
            size,
            count,
            "http://localhost:8080".to_string(),
            "application/octet-stream".to_string(),
        );
        BurstResult::compute(
            &burst,
            Duration::from_secs_f64(elapsed_secs),
            successful,
            count - successful,
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_run() {
        let stats = RunStatistics::from_results(&[]);
        assert_eq!(stats.burst_count, 0);
        assert_eq!(stats.total_attempted, 0);
        assert_eq!(stats.success_rate, 0.0);
        assert!(stats.best_burst_payload_bytes.is_none());
        assert!(!stats.has_failures());
    }

    #[test]
    fn test_totals_across_bursts() {
        let results = vec![
            result(1280, 1000, 1000, 1.0),
            result(12800, 1000, 900, 2.0),
        ];
        let stats = RunStatistics::from_results(&results);

        assert_eq!(stats.burst_count, 2);
        assert_eq!(stats.total_attempted, 2000);
        assert_eq!(stats.total_successful, 1900);
        assert_eq!(stats.total_failed, 100);
        assert_eq!(stats.total_bytes_attempted, 1280 * 1000 + 12800 * 1000);
        assert_eq!(stats.total_elapsed, Duration::from_secs(3));
        assert_eq!(stats.success_rate, 95.0);
        assert!(stats.has_failures());
    }

    #[test]
    fn test_best_burst_by_bit_rate() {
        // 1280 B burst: 1000 pkt/s -> ~10.2 Mbps
        // 12800 B burst: 500 pkt/s -> ~51.2 Mbps
        let results = vec![
            result(1280, 1000, 1000, 1.0),
            result(12800, 1000, 1000, 2.0),
        ];
        let stats = RunStatistics::from_results(&results);
        assert_eq!(stats.best_burst_payload_bytes, Some(12800));
        assert_eq!(stats.best_bit_rate_bps, Some(500.0 * 12800.0 * 8.0));
    }
}
