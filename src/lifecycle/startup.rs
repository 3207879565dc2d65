//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration (file optional, defaults otherwise)
//! - Apply command-line overrides
//! - Validate the merged result before anything binds
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Overrides win over file values

use std::path::Path;

use crate::config::{load_config, validate_config, ConfigError, ProxyConfig};

/// Values given on the command line that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind_address: Option<String>,
    pub upstream_address: Option<String>,
    pub static_root: Option<String>,
    pub log_level: Option<String>,
}

impl Overrides {
    fn apply(&self, config: &mut ProxyConfig) {
        if let Some(bind) = &self.bind_address {
            config.listener.bind_address = bind.clone();
        }
        if let Some(upstream) = &self.upstream_address {
            config.upstream.address = upstream.clone();
        }
        if let Some(root) = &self.static_root {
            config.static_files.root = root.clone();
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
    }
}

/// Build the effective configuration.
pub fn resolve_config(path: Option<&Path>, overrides: &Overrides) -> Result<ProxyConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };

    overrides.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
