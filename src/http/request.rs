//! Upstream request derivation.
//!
//! # Responsibilities
//! - Strip the forwarding prefix from the incoming path
//! - Build the upstream URL
//! - Turn the password header into Basic credentials
//!
//! # Design Decisions
//! - Prefix stripping is textual; no percent-decoding or normalization
//! - The query string travels with the path
//! - Username is always empty
//! - Password header bytes are read as ISO-8859-1, never dropped

use axum::body::Body;
use axum::http::{HeaderMap, Request};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::UpstreamConfig;

/// A request about to be sent to the media player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub url: String,
    pub authorization: Option<String>,
}

impl UpstreamRequest {
    /// Build from an upstream address, a prefix-relative path and an optional password.
    pub fn new(address: &str, relative_path: &str, password: Option<&str>) -> Self {
        Self {
            url: format!("http://{}/{}", address, relative_path),
            authorization: password.and_then(basic_credentials),
        }
    }

    /// Derive from an incoming request. `None` when the path lacks the prefix.
    pub fn derive(req: &Request<Body>, config: &UpstreamConfig) -> Option<Self> {
        let path_and_query = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| req.uri().path());
        let relative = relative_path(path_and_query, &config.path_prefix)?;

        let password = password_from_headers(req.headers(), &config.password_header);
        tracing::info!(password = %password.as_deref().unwrap_or_default(), "Received password");

        let upstream = Self::new(&config.address, relative, password.as_deref());
        if upstream.authorization.is_some() {
            tracing::info!("Added auth header");
        }
        Some(upstream)
    }
}

/// Remove `prefix` from the front of `path`, and nothing else.
pub fn relative_path<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    path.strip_prefix(prefix)
}

/// Read the password header; header name lookup is case-insensitive.
///
/// Header bytes are taken as ISO-8859-1, so non-ASCII passwords survive and
/// reach the credentials as their UTF-8 encoding.
pub fn password_from_headers(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(name)?;
    Some(value.as_bytes().iter().map(|&b| char::from(b)).collect())
}

/// `Basic base64(":" + password)`, or `None` for an empty password.
pub fn basic_credentials(password: &str) -> Option<String> {
    if password.is_empty() {
        return None;
    }
    let encoded = STANDARD.encode(format!(":{}", password));
    Some(format!("Basic {}", encoded))
}
