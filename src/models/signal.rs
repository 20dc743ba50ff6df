//! Persisted signal record consumed by the MT5 terminal.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Broker clocks run at GMT+3; file timestamps are shifted to match.
const BROKER_OFFSET_HOURS: i64 = 3;

/// Outcome of a successful reconciliation, written to the per-symbol
/// signal file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub symbol: String,
    pub payload: String,
    /// Integer epoch seconds, shifted forward by the broker offset.
    pub timestamp: i64,
}

impl SignalRecord {
    /// Build a record stamped with the current broker-shifted time.
    pub fn new(symbol: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            payload: payload.into(),
            timestamp: broker_timestamp(),
        }
    }

    /// Wire format the terminal parses: `payload|timestamp`, plain text,
    /// no framing.
    pub fn encode(&self) -> String {
        format!("{}|{}", self.payload, self.timestamp)
    }
}

/// Current UTC time shifted forward by the broker offset, truncated to
/// epoch seconds. A clock hack inherited from the terminal side, not a
/// timezone conversion.
pub fn broker_timestamp() -> i64 {
    (Utc::now() + Duration::hours(BROKER_OFFSET_HOURS)).timestamp()
}
