//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing)
//!     → routing layer picks Preflight | Upstream | Static
//!     → Preflight: cors.rs answers locally
//!     → Upstream: request.rs derives URL + credentials
//!                 → upstream.rs performs the bounded GET
//!                 → response.rs shapes success / failure
//!     → Static: ServeDir
//!     → Send to client
//! ```

pub mod cors;
pub mod request;
pub mod response;
pub mod server;
pub mod upstream;

pub use cors::CorsHeaders;
pub use request::UpstreamRequest;
pub use server::{AppState, HttpServer, ServerError};
pub use upstream::{UpstreamClient, UpstreamError};
