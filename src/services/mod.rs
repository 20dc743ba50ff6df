//! Service layer: signal reconciliation and persistence.

pub mod reconciler;
pub mod store;

pub use reconciler::{SignalReconciler, SubmitOutcome};
pub use store::{FileSignalStore, SignalStore};
