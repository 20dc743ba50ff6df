//! Signal reconciliation against the direction registry.

use crate::models::{Direction, SignalRecord};
use crate::registry::DirectionRegistry;
use crate::services::store::SignalStore;
use std::io;
use std::sync::Arc;
use tracing::info;

/// Result of submitting a signal. A mismatch is an expected outcome, not an
/// error; only persistence failures surface as `Err` from [`SignalReconciler::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Payload agreed with the registry direction; the record was written.
    Written(SignalRecord),
    /// Payload disagreed with the registry's current direction; nothing written.
    Mismatch {
        symbol: String,
        current: Direction,
        payload: String,
    },
}

impl SubmitOutcome {
    /// Response body sent back to the webhook caller.
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Written(record) => {
                format!("Signal written successfully to {}", record.symbol)
            }
            SubmitOutcome::Mismatch {
                symbol,
                current,
                payload,
            } => format!(
                "Signal rejected for {}: registry direction is {}, received {:?}",
                symbol, current, payload
            ),
        }
    }
}

/// Decides whether an incoming short-timeframe signal agrees with the
/// longer-timeframe direction on record, and persists it when it does.
pub struct SignalReconciler {
    registry: DirectionRegistry,
    store: Arc<dyn SignalStore>,
}

impl SignalReconciler {
    pub fn new(registry: DirectionRegistry, store: Arc<dyn SignalStore>) -> Self {
        Self { registry, store }
    }

    /// Reconcile a signal for `symbol`.
    ///
    /// Symbol and payload are lowercased first. The registry is read once;
    /// the payload must equal the textual identifier of the direction on
    /// record (the `unknown` sentinel is never matchable, so symbols without
    /// a recorded direction always mismatch). On agreement a broker-stamped
    /// record is persisted, overwriting any prior record for the symbol.
    pub async fn submit(&self, symbol: &str, payload: &str) -> io::Result<SubmitOutcome> {
        let symbol = symbol.trim().to_lowercase();
        let payload = payload.trim().to_lowercase();

        let current = self.registry.get(&symbol).await;
        if !current.matches_payload(&payload) {
            info!(%symbol, current = %current, %payload, "Signal disagrees with registry direction");
            return Ok(SubmitOutcome::Mismatch {
                symbol,
                current,
                payload,
            });
        }

        let record = SignalRecord::new(symbol, payload);
        self.store.persist(&record).await?;
        info!(symbol = %record.symbol, timestamp = record.timestamp, "Signal reconciled and persisted");
        Ok(SubmitOutcome::Written(record))
    }
}
