//! Type definitions and aliases

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// Outcome of a single packet attempt within a burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PacketStatus {
    /// The request/response exchange completed (any HTTP status)
    Success,
    /// The exchange failed at the transport or protocol level
    Failed,
}

impl PacketStatus {
    /// Whether this attempt completed a full request/response exchange
    pub fn is_success(&self) -> bool {
        matches!(self, PacketStatus::Success)
    }
}
