//! Observability
//!
//! Structured logging infrastructure for tracing generator runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
