//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (ordered route lookup)
//!     → matcher.rs (evaluate match conditions)
//!     → Return: RouteTarget (Preflight | Upstream | Static)
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always matches same route
//! - First match wins; static file serving is the default

pub mod matcher;
pub mod router;

pub use router::{Route, RouteTarget, Router};
