//! Burst descriptors and measured result data models

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Immutable description of a single timed burst
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurstConfig {
    /// Size of the binary body carried by every packet in this burst
    pub payload_size_bytes: u64,

    /// Number of packets to attempt
    pub packet_count: u32,

    /// Target endpoint URL
    pub endpoint: String,

    /// Content-Type header value
    pub content_type: String,
}

impl BurstConfig {
    /// Create a new burst configuration
    pub fn new(
        payload_size_bytes: u64,
        packet_count: u32,
        endpoint: String,
        content_type: String,
    ) -> Self {
        Self {
            payload_size_bytes,
            packet_count,
            endpoint,
            content_type,
        }
    }
}

/// Immutable payload buffer shared read-only across all packets of a burst
#[derive(Debug, Clone)]
pub struct Payload {
    bytes: Bytes,
}

impl Payload {
    /// Build a payload of the given size filled with the sentinel byte
    pub fn filled(size_bytes: u64) -> Self {
        Self {
            bytes: Bytes::from(vec![crate::defaults::PAYLOAD_SENTINEL; size_bytes as usize]),
        }
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Cheap handle to the underlying buffer (no copy)
    pub fn bytes(&self) -> Bytes {
        self.bytes.clone()
    }
}

/// Measured outcome of one completed burst
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurstResult {
    /// Payload size used for every packet in the burst
    pub payload_size_bytes: u64,

    /// Number of packets attempted (failed attempts included)
    pub packet_count: u32,

    /// Number of packets that completed a request/response exchange
    pub successful_packets: u32,

    /// Number of packets that failed at the transport or protocol level
    pub failed_packets: u32,

    /// Wall-clock duration of the full burst on a monotonic clock
    pub elapsed: Duration,

    /// Attempted packets per second; None when undefined (zero elapsed
    /// or zero packets)
    pub packet_rate_hz: Option<f64>,

    /// Effective throughput in bits per second; None when the packet
    /// rate is undefined
    pub bit_rate_bps: Option<f64>,

    /// When the burst started
    pub started_at: DateTime<Utc>,

    /// When the burst completed
    pub completed_at: DateTime<Utc>,
}

impl BurstResult {
    /// Compute a burst result from raw counters and timing.
    ///
    /// Rates are derived from *attempted* packets, matching the reference
    /// behavior of characterizing throughput including failure overhead.
    /// `packet_rate_hz = packet_count / elapsed_secs` and
    /// `bit_rate_bps = packet_rate_hz * payload_size_bytes * 8`; both are
    /// None rather than a division by zero when the burst had no packets
    /// or measured no elapsed time.
    pub fn compute(
        burst: &BurstConfig,
        elapsed: Duration,
        successful_packets: u32,
        failed_packets: u32,
        started_at: DateTime<Utc>,
    ) -> Self {
        let elapsed_secs = elapsed.as_secs_f64();

        let packet_rate_hz = if burst.packet_count > 0 && elapsed_secs > 0.0 {
            Some(burst.packet_count as f64 / elapsed_secs)
        } else {
            None
        };

        let bit_rate_bps = packet_rate_hz.map(|rate| rate * burst.payload_size_bytes as f64 * 8.0);

        Self {
            payload_size_bytes: burst.payload_size_bytes,
            packet_count: burst.packet_count,
            successful_packets,
            failed_packets,
            elapsed,
            packet_rate_hz,
            bit_rate_bps,
            started_at,
            completed_at: Utc::now(),
        }
    }

    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Packet rate in kilo-packets per second, if defined
    pub fn kilo_packet_rate(&self) -> Option<f64> {
        self.packet_rate_hz.map(|rate| rate / 1000.0)
    }

    /// Bit rate in megabits per second, if defined
    pub fn megabit_rate(&self) -> Option<f64> {
        self.bit_rate_bps.map(|rate| rate / 1e6)
    }

    /// Success rate as a percentage of attempted packets
    pub fn success_rate(&self) -> f64 {
        if self.packet_count == 0 {
            0.0
        } else {
            (self.successful_packets as f64 / self.packet_count as f64) * 100.0
        }
    }

    /// Total bytes attempted across the burst
    pub fn bytes_attempted(&self) -> u64 {
        self.payload_size_bytes * self.packet_count as u64
    }
}
