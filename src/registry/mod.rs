//! In-memory direction registry shared across request handlers.

use crate::models::Direction;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-wide mapping from instrument symbol to reference direction.
///
/// Owned by the service state and injected into handlers; all access goes
/// through the internal lock. State is memory-resident and lost on restart.
#[derive(Clone)]
pub struct DirectionRegistry {
    /// Seeded instruments, in snapshot enumeration order.
    symbols: Arc<Vec<String>>,
    directions: Arc<RwLock<HashMap<String, Direction>>>,
}

impl DirectionRegistry {
    /// Create a registry seeded with the given instruments, all starting
    /// at `Direction::Unknown`.
    pub fn new(symbols: Vec<String>) -> Self {
        let seeded: Vec<String> = symbols.into_iter().map(|s| s.to_lowercase()).collect();
        let directions = seeded
            .iter()
            .map(|s| (s.clone(), Direction::Unknown))
            .collect();
        Self {
            symbols: Arc::new(seeded),
            directions: Arc::new(RwLock::new(directions)),
        }
    }

    /// Current direction for a symbol, `Unknown` if never set.
    pub async fn get(&self, symbol: &str) -> Direction {
        let directions = self.directions.read().await;
        directions
            .get(&symbol.to_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Apply an update token for a symbol. Only `buy`/`sell` transition the
    /// entry; any other token is silently ignored.
    pub async fn set(&self, symbol: &str, token: &str) {
        let Some(direction) = Direction::from_update_token(token) else {
            tracing::debug!(symbol, token, "Ignoring unrecognized direction token");
            return;
        };
        let mut directions = self.directions.write().await;
        directions.insert(symbol.to_lowercase(), direction);
    }

    /// Human-readable snapshot of the seeded symbols' directions, one line
    /// per instrument, in seeded order.
    pub async fn describe(&self) -> String {
        let directions = self.directions.read().await;
        let mut out = String::new();
        for symbol in self.symbols.iter() {
            let direction = directions.get(symbol).copied().unwrap_or_default();
            let _ = writeln!(out, "{}: {}", symbol, direction);
        }
        out
    }
}
