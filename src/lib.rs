//! CORS forwarding proxy for the VLC HTTP interface.

pub mod config;
pub mod control;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
