//! Sigbridge — HTTP signal bridge for a MetaTrader 5 terminal.
//!
//! Receives short-timeframe trading signals over HTTP, reconciles them
//! against a longer-timeframe reference direction held in memory, and on
//! agreement writes a timestamped signal file the terminal polls.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod registry;
pub mod services;
