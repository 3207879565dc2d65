//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing` in every subsystem
//! - Request ID (`x-request-id`) assigned at the edge and echoed back
//! - Upstream failures always logged, never silently dropped

pub mod logging;

pub use logging::init_logging;
