//! Shared data models spanning the bridge layers.

pub mod direction;
pub mod signal;

pub use direction::Direction;
pub use signal::SignalRecord;
