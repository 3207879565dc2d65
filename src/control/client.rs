//! Direct client for the VLC HTTP interface.
//!
//! Talks to the player without going through the proxy. Every call carries
//! Basic auth with an empty username.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::control::commands::PlayerCommand;

pub const DEFAULT_STATUS_URL: &str = "http://localhost:8080/requests/status.xml";

/// Timeout for a single command.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(2);

/// Timeout for the connectivity probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("invalid player URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("connection error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("VLC returned status {0}")]
    Status(StatusCode),
}

#[derive(Debug, Clone)]
pub struct ControlClient {
    client: reqwest::Client,
    url: Url,
    password: String,
}

impl ControlClient {
    pub fn new(url: &str, password: impl Into<String>) -> Result<Self, ControlError> {
        Ok(Self {
            client: reqwest::Client::builder().no_proxy().build()?,
            url: Url::parse(url)?,
            password: password.into(),
        })
    }

    /// Player URL with `pairs` appended to its query string.
    pub fn command_url<K, V>(&self, pairs: impl IntoIterator<Item = (K, V)>) -> Url
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = self.url.clone();
        url.query_pairs_mut().extend_pairs(pairs);
        url
    }

    pub async fn send(&self, command: PlayerCommand) -> Result<(), ControlError> {
        self.dispatch(self.command_url(command.query())).await
    }

    /// Send an arbitrary command name understood by the player.
    pub async fn send_raw(&self, command: &str, val: Option<&str>) -> Result<(), ControlError> {
        let pairs = std::iter::once(("command", command)).chain(val.map(|v| ("val", v)));
        self.dispatch(self.command_url(pairs)).await
    }

    async fn dispatch(&self, url: Url) -> Result<(), ControlError> {
        tracing::debug!(%url, "Sending VLC command");
        self.get(url, COMMAND_TIMEOUT).await
    }

    /// Check that the player answers at all.
    pub async fn probe(&self) -> Result<(), ControlError> {
        self.get(self.url.clone(), PROBE_TIMEOUT).await
    }

    async fn get(&self, url: Url, timeout: Duration) -> Result<(), ControlError> {
        let response = self
            .client
            .get(url)
            .basic_auth("", Some(&self.password))
            .timeout(timeout)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(ControlError::Status(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_url() {
        let client = ControlClient::new(DEFAULT_STATUS_URL, "test123").unwrap();

        assert_eq!(
            client.command_url(PlayerCommand::PlayPause.query()).as_str(),
            "http://localhost:8080/requests/status.xml?command=pl_pause"
        );
        assert_eq!(
            client.command_url(PlayerCommand::Seek(10).query()).as_str(),
            "http://localhost:8080/requests/status.xml?command=seek&val=%2B10"
        );
        assert_eq!(
            client.command_url([("command", "volume"), ("val", "-10")]).as_str(),
            "http://localhost:8080/requests/status.xml?command=volume&val=-10"
        );
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            ControlClient::new("not a url", ""),
            Err(ControlError::InvalidUrl(_))
        ));
    }
}
