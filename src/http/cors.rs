//! CORS response headers.
//!
//! The header set is compiled once from [`CorsConfig`] and stamped onto
//! preflight, forwarded and failed responses.

use axum::body::Body;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::Response;

use crate::config::{CorsConfig, ErrorHeaderPolicy, ValidationError};

/// Pre-validated CORS header values.
#[derive(Debug, Clone)]
pub struct CorsHeaders {
    allow_origin: HeaderValue,
    allow_methods: HeaderValue,
    allow_headers: HeaderValue,
    error_policy: ErrorHeaderPolicy,
}

impl CorsHeaders {
    pub fn from_config(config: &CorsConfig) -> Result<Self, ValidationError> {
        let value = |field: &'static str, value: &str| {
            HeaderValue::from_str(value).map_err(|_| ValidationError::CorsValue {
                field,
                value: value.to_string(),
            })
        };

        Ok(Self {
            allow_origin: value("allow_origin", &config.allow_origin)?,
            allow_methods: value("allow_methods", &config.allow_methods)?,
            allow_headers: value("allow_headers", &config.allow_headers)?,
            error_policy: config.error_headers,
        })
    }

    /// Insert the full header set.
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone());
    }

    /// Insert the headers that accompany a failed upstream call.
    pub fn apply_error(&self, headers: &mut HeaderMap) {
        match self.error_policy {
            ErrorHeaderPolicy::Full => self.apply(headers),
            ErrorHeaderPolicy::OriginOnly => {
                headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
            }
        }
    }

    /// Answer a browser preflight: 200, CORS headers, no body.
    pub fn preflight(&self) -> Response {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::OK;
        self.apply(response.headers_mut());
        response
    }
}

impl Default for CorsHeaders {
    fn default() -> Self {
        Self {
            allow_origin: HeaderValue::from_static("*"),
            allow_methods: HeaderValue::from_static("GET, POST, OPTIONS"),
            allow_headers: HeaderValue::from_static("Content-Type, VLC-Password, Authorization"),
            error_policy: ErrorHeaderPolicy::Full,
        }
    }
}
