//! Core application primitives (HTTP server, shared state)

pub mod http;

pub use http::*;
