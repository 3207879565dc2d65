//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the CORS proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Media player control endpoint being proxied to.
    pub upstream: UpstreamConfig,

    /// CORS response headers.
    pub cors: CorsConfig,

    /// Fallback static file service.
    pub static_files: StaticFilesConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Upstream (VLC HTTP interface) configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Upstream host and port (e.g., "localhost:8080").
    pub address: String,

    /// Path prefix that selects the forwarding route. Must start and end with '/'.
    pub path_prefix: String,

    /// Request header carrying the plaintext password.
    pub password_header: String,

    /// Upper bound for a single upstream round-trip in seconds (0 = unbounded).
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: "localhost:8080".to_string(),
            path_prefix: "/vlc/".to_string(),
            password_header: "VLC-Password".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Which CORS headers accompany a failed upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorHeaderPolicy {
    /// Same header set as successful responses.
    #[default]
    Full,
    /// Only `Access-Control-Allow-Origin`.
    OriginOnly,
}

/// CORS header configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allow_origin: String,
    pub allow_methods: String,
    pub allow_headers: String,
    pub error_headers: ErrorHeaderPolicy,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_methods: "GET, POST, OPTIONS".to_string(),
            allow_headers: "Content-Type, VLC-Password, Authorization".to_string(),
            error_headers: ErrorHeaderPolicy::Full,
        }
    }
}

/// Static file fallback configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Serve files for requests that match no other route.
    pub enabled: bool,

    /// Directory files are resolved against.
    pub root: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            root: ".".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
