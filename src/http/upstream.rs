//! Upstream HTTP client.
//!
//! # Responsibilities
//! - Issue the single GET to the media player
//! - Bound the round-trip with a timeout
//! - Classify failures (transport, status, timeout, decoding)
//!
//! # Design Decisions
//! - Never retried
//! - Body is decoded as UTF-8 text; invalid bytes are an error, not a panic
//! - System proxy settings are ignored (the upstream is local)

use std::time::Duration;

use axum::http::StatusCode;
use thiserror::Error;
use tokio::time;

use crate::config::UpstreamConfig;
use crate::http::request::UpstreamRequest;

/// Reasons a forwarded call can fail.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned {0}")]
    Status(StatusCode),

    #[error("upstream did not respond within {0:?}")]
    Timeout(Duration),

    #[error("upstream body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Client for the media player control endpoint.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().no_proxy().build()?;
        let timeout = match config.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Ok(Self { client, timeout })
    }

    /// Send the request and return the body as text.
    pub async fn fetch(&self, request: &UpstreamRequest) -> Result<String, UpstreamError> {
        match self.timeout {
            Some(limit) => time::timeout(limit, self.fetch_unbounded(request))
                .await
                .map_err(|_| UpstreamError::Timeout(limit))?,
            None => self.fetch_unbounded(request).await,
        }
    }

    async fn fetch_unbounded(&self, request: &UpstreamRequest) -> Result<String, UpstreamError> {
        let mut builder = self.client.get(&request.url);
        if let Some(auth) = &request.authorization {
            builder = builder.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = builder.send().await?;
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(UpstreamError::Status(status));
        }

        let bytes = response.bytes().await?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}
