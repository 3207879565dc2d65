//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the listener address and upstream authority
//! - Check the forwarding prefix shape
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::HeaderName;
use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a host:port pair")]
    BindAddress(String),

    #[error("upstream.address '{0}' is not a valid host[:port]")]
    UpstreamAddress(String),

    #[error("upstream.path_prefix '{0}' must start and end with '/'")]
    PathPrefix(String),

    #[error("upstream.password_header '{0}' is not a valid header name")]
    PasswordHeader(String),

    #[error("cors.{field} '{value}' is not a valid header value")]
    CorsValue { field: &'static str, value: String },

    #[error("static_files.root must not be empty when static files are enabled")]
    StaticRoot,
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_valid_bind_address(&config.listener.bind_address) {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let upstream = &config.upstream;
    if !is_valid_authority(&upstream.address) {
        errors.push(ValidationError::UpstreamAddress(upstream.address.clone()));
    }

    let prefix = &upstream.path_prefix;
    if prefix.len() < 2 || !prefix.starts_with('/') || !prefix.ends_with('/') {
        errors.push(ValidationError::PathPrefix(prefix.clone()));
    }

    if HeaderName::from_bytes(upstream.password_header.as_bytes()).is_err() {
        errors.push(ValidationError::PasswordHeader(
            upstream.password_header.clone(),
        ));
    }

    let cors = &config.cors;
    for (field, value) in [
        ("allow_origin", &cors.allow_origin),
        ("allow_methods", &cors.allow_methods),
        ("allow_headers", &cors.allow_headers),
    ] {
        if axum::http::HeaderValue::from_str(value).is_err() {
            errors.push(ValidationError::CorsValue {
                field,
                value: value.clone(),
            });
        }
    }

    if config.static_files.enabled && config.static_files.root.trim().is_empty() {
        errors.push(ValidationError::StaticRoot);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A socket address, or a host name with an explicit port (`localhost:5000`).
fn is_valid_bind_address(address: &str) -> bool {
    if address.parse::<SocketAddr>().is_ok() {
        return true;
    }
    match address.rsplit_once(':') {
        Some((host, port)) => {
            !host.is_empty() && port.parse::<u16>().is_ok() && is_valid_authority(address)
        }
        None => false,
    }
}

fn is_valid_authority(address: &str) -> bool {
    if address.is_empty() || address.contains('/') || address.contains('@') {
        return false;
    }
    match Url::parse(&format!("http://{}/", address)) {
        Ok(url) => url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ProxyConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ProxyConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ProxyConfig::default();
        config.listener.bind_address = "not an address".into();
        config.upstream.address = "http://localhost:8080".into();
        config.upstream.path_prefix = "vlc".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::PathPrefix("vlc".into())));
    }

    #[test]
    fn test_bind_address_accepts_host_names() {
        assert!(is_valid_bind_address("0.0.0.0:5000"));
        assert!(is_valid_bind_address("[::]:5000"));
        assert!(is_valid_bind_address("localhost:5000"));
        assert!(!is_valid_bind_address("localhost"));
        assert!(!is_valid_bind_address("nowhere"));
        assert!(!is_valid_bind_address("localhost:70000"));
        assert!(!is_valid_bind_address(":5000"));

        let mut config = ProxyConfig::default();
        config.listener.bind_address = "localhost:5000".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_upstream_authority() {
        assert!(is_valid_authority("localhost:8080"));
        assert!(is_valid_authority("127.0.0.1"));
        assert!(is_valid_authority("[::1]:8080"));
        assert!(!is_valid_authority(""));
        assert!(!is_valid_authority("localhost:notaport"));
        assert!(!is_valid_authority("user@localhost"));
    }

    #[test]
    fn test_bad_password_header() {
        let mut config = ProxyConfig::default();
        config.upstream.password_header = "VLC Password".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::PasswordHeader("VLC Password".into())]
        );
    }

    #[test]
    fn test_static_root_only_checked_when_enabled() {
        let mut config = ProxyConfig::default();
        config.static_files.root = "".into();
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::StaticRoot]
        );

        config.static_files.enabled = false;
        assert!(validate_config(&config).is_ok());
    }
}
