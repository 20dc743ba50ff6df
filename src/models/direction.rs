//! Reference trading direction for an instrument.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longer-timeframe trading bias for a symbol.
///
/// `Unknown` is the initial state of every symbol and is never a valid
/// reconciliation target: no incoming payload can match it, so a symbol
/// without a recorded direction always rejects signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    Sell,
    #[default]
    Unknown,
}

impl Direction {
    /// Textual identifier, used in snapshots and mismatch messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "buy",
            Direction::Sell => "sell",
            Direction::Unknown => "unknown",
        }
    }

    /// Parse an update token. Only `buy` and `sell` (case-insensitive) are
    /// recognized; everything else, including "unknown", yields `None` and
    /// the caller leaves the registry untouched.
    pub fn from_update_token(token: &str) -> Option<Direction> {
        match token.trim().to_lowercase().as_str() {
            "buy" => Some(Direction::Buy),
            "sell" => Some(Direction::Sell),
            _ => None,
        }
    }

    /// Whether an incoming signal payload agrees with this direction.
    ///
    /// Matches on the direction's textual identifier for `Buy`/`Sell`.
    /// `Unknown` never matches, no matter what the payload spells; the
    /// literal payload "unknown" is intentionally unmatchable.
    pub fn matches_payload(&self, payload: &str) -> bool {
        match self {
            Direction::Buy | Direction::Sell => payload == self.as_str(),
            Direction::Unknown => false,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
