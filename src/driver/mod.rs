//! Benchmark driver: escalation schedule, burst loop, timing and reporting
//!
//! The driver owns the run: it walks the geometric payload schedule, times
//! each burst on a monotonic clock, and emits the report block before
//! advancing to the next size. It only talks to the network through the
//! [`Transport`] trait.

use crate::{
    client::{SendRequest, Transport},
    error::Result,
    logging::Logger,
    models::{BurstConfig, BurstResult, Config, Payload},
    output::OutputCoordinator,
    types::PacketStatus,
};
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;

/// Orchestrates an escalating series of timed bursts
pub struct BenchmarkDriver {
    config: Config,
    transport: Arc<dyn Transport>,
    coordinator: OutputCoordinator,
    logger: Logger,
}

impl BenchmarkDriver {
    /// Create a new driver over the given transport
    pub fn new(
        config: Config,
        transport: Arc<dyn Transport>,
        coordinator: OutputCoordinator,
        logger: Logger,
    ) -> Self {
        Self {
            config,
            transport,
            coordinator,
            logger,
        }
    }

    /// Run the full escalation schedule, printing one report block per
    /// burst, and return the measured results.
    ///
    /// The loop is finite: it always terminates after `escalation_steps`
    /// bursts, with no early exit and no pause between steps. Per-packet
    /// failures never abort a burst.
    pub async fn run(&self) -> Result<Vec<BurstResult>> {
        let schedule = self.config.escalation_schedule()?;
        let mut results = Vec::with_capacity(schedule.len());

        for (step, payload_size) in schedule.iter().enumerate() {
            self.logger.debug(&format!(
                "step {}/{}: payload {} bytes, {} packets",
                step + 1,
                schedule.len(),
                payload_size,
                self.config.packets_per_burst
            ));

            let burst = BurstConfig::new(
                *payload_size,
                self.config.packets_per_burst,
                self.config.endpoint.clone(),
                self.config.content_type.clone(),
            );

            let result = self.run_burst(&burst).await;
            println!("{}", self.coordinator.display_burst_result(&result)?);
            results.push(result);
        }

        Ok(results)
    }

    /// Execute one timed burst and compute its result.
    ///
    /// The payload is built once and shared read-only across every packet.
    /// Timing covers all attempts, failed ones included, so the reported
    /// rate characterizes throughput with failure overhead.
    pub async fn run_burst(&self, burst: &BurstConfig) -> BurstResult {
        let payload = Payload::filled(burst.payload_size_bytes);
        let started_at = Utc::now();
        let start = Instant::now();

        let (successful, failed) = if self.config.concurrency <= 1 {
            self.run_sequential(burst, &payload).await
        } else {
            self.run_pooled(burst, &payload).await
        };

        let elapsed = start.elapsed();
        BurstResult::compute(burst, elapsed, successful, failed, started_at)
    }

    /// Attempt one packet: errors are logged as a diagnostic and folded
    /// into the status, never retried and never propagated
    async fn send_one(&self, burst: &BurstConfig, payload: &Payload, packet_index: u32) -> PacketStatus {
        let request = SendRequest::new(
            burst.endpoint.clone(),
            payload.bytes(),
            burst.content_type.clone(),
        );

        match self.transport.send(request).await {
            Ok(_) => PacketStatus::Success,
            Err(e) => {
                self.logger.warn(&format!(
                    "packet {}/{} failed: {}",
                    packet_index, burst.packet_count, e
                ));
                PacketStatus::Failed
            }
        }
    }

    /// Baseline mode: packets sent strictly sequentially in increasing
    /// index order, one in flight at a time
    async fn run_sequential(&self, burst: &BurstConfig, payload: &Payload) -> (u32, u32) {
        let mut successful = 0;
        let mut failed = 0;

        for packet_index in 1..=burst.packet_count {
            match self.send_one(burst, payload, packet_index).await {
                PacketStatus::Success => successful += 1,
                PacketStatus::Failed => failed += 1,
            }
        }

        (successful, failed)
    }

    /// Opt-in concurrent mode: a bounded worker pool drains the closed set
    /// of N send tasks, results aggregated after all complete
    async fn run_pooled(&self, burst: &BurstConfig, payload: &Payload) -> (u32, u32) {
        let pool_size = self.effective_pool_size(burst.packet_count);
        self.logger
            .debug(&format!("worker pool of {} draining burst", pool_size));

        let outcomes: Vec<PacketStatus> = stream::iter(1..=burst.packet_count)
            .map(|packet_index| self.send_one(burst, payload, packet_index))
            .buffer_unordered(pool_size)
            .collect()
            .await;

        let successful = outcomes.iter().filter(|s| s.is_success()).count() as u32;
        let failed = burst.packet_count - successful;

        (successful, failed)
    }

    /// Cap the worker pool at the burst size and at a multiple of the
    /// available logical CPUs
    fn effective_pool_size(&self, packet_count: u32) -> usize {
        let cpu_cap = num_cpus::get().saturating_mul(64).max(1);
        self.config
            .concurrency
            .min(cpu_cap)
            .min(packet_count.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::logging::LogLevel;
    use crate::output::OutputFormatterFactory;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    /// Transport double recording every send it receives
    struct MockTransport {
        sends: AtomicU32,
        payload_sizes: Mutex<Vec<usize>>,
        fail_all: bool,
    }

    impl MockTransport {
        fn new(fail_all: bool) -> Arc<Self> {
            Arc::new(Self {
                sends: AtomicU32::new(0),
                payload_sizes: Mutex::new(Vec::new()),
                fail_all,
            })
        }

        fn send_count(&self) -> u32 {
            self.sends.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(&self, request: SendRequest) -> Result<Bytes> {
            self.sends.fetch_add(1, Ordering::SeqCst);
            self.payload_sizes
                .lock()
                .unwrap()
                .push(request.payload.len());

            if self.fail_all {
                Err(AppError::transport("connection refused"))
            } else {
                Ok(Bytes::from_static(b"ok"))
            }
        }
    }

    fn driver_with(config: Config, transport: Arc<MockTransport>) -> BenchmarkDriver {
        let coordinator = OutputCoordinator::new(OutputFormatterFactory::create_plain_formatter());
        let logger = Logger::new("driver", LogLevel::Error, false);
        BenchmarkDriver::new(config, transport, coordinator, logger)
    }

    fn small_config() -> Config {
        let mut config = Config::default();
        config.packets_per_burst = 10;
        config.escalation_steps = 2;
        config.escalation_factor = 2;
        config.initial_payload_bytes = 4;
        config
    }

    #[tokio::test]
    async fn test_exactly_n_sends_per_burst() {
        let transport = MockTransport::new(false);
        let driver = driver_with(small_config(), transport.clone());

        let results = driver.run().await.unwrap();

        // 2 bursts of 10 packets each
        assert_eq!(transport.send_count(), 20);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.packet_count == 10));
        assert!(results.iter().all(|r| r.successful_packets == 10));
    }

    #[tokio::test]
    async fn test_escalation_order_and_sizes() {
        let transport = MockTransport::new(false);
        let driver = driver_with(small_config(), transport.clone());

        let results = driver.run().await.unwrap();
        assert_eq!(results[0].payload_size_bytes, 8);
        assert_eq!(results[1].payload_size_bytes, 16);

        // Every packet of burst k carried the size of burst k, in order
        let sizes = transport.payload_sizes.lock().unwrap();
        assert_eq!(sizes[..10], [8; 10]);
        assert_eq!(sizes[10..], [16; 10]);
    }

    #[tokio::test]
    async fn test_all_failures_still_complete_burst() {
        let transport = MockTransport::new(true);
        let driver = driver_with(small_config(), transport.clone());

        let results = driver.run().await.unwrap();

        assert_eq!(transport.send_count(), 20);
        for result in &results {
            assert_eq!(result.failed_packets, 10);
            assert_eq!(result.successful_packets, 0);
            assert!(result.elapsed_secs() > 0.0);
            // Rates still reflect attempted packets
            assert!(result.packet_rate_hz.is_some());
        }
    }

    #[tokio::test]
    async fn test_pooled_mode_attempts_every_packet() {
        let mut config = small_config();
        config.concurrency = 4;
        let transport = MockTransport::new(false);
        let driver = driver_with(config, transport.clone());

        let results = driver.run().await.unwrap();
        assert_eq!(transport.send_count(), 20);
        assert!(results.iter().all(|r| r.successful_packets == 10));
    }

    #[tokio::test]
    async fn test_rate_identity_holds_for_driver_output() {
        let transport = MockTransport::new(false);
        let driver = driver_with(small_config(), transport);

        let results = driver.run().await.unwrap();
        for result in results {
            if let (Some(packet_rate), Some(bit_rate)) =
                (result.packet_rate_hz, result.bit_rate_bps)
            {
                assert_eq!(
                    bit_rate,
                    packet_rate * result.payload_size_bytes as f64 * 8.0
                );
            }
        }
    }

    #[test]
    fn test_effective_pool_size_caps() {
        let mut config = small_config();
        config.concurrency = 512;
        let transport = MockTransport::new(false);
        let driver = driver_with(config, transport);

        // Never wider than the burst itself
        assert_eq!(driver.effective_pool_size(10), 10);
        assert!(driver.effective_pool_size(10_000) <= 512);
    }
}
