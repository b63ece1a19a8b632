//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Bind the listener
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last, after configuration is known to be valid

use std::path::Path;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_config, validate_config, ConfigError, ServiceConfig};

/// Fatal errors before the server starts accepting traffic.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve the effective configuration.
///
/// Reads `path` when given, otherwise starts from defaults. `bind_override`
/// replaces the listener address; the result is validated either way.
pub fn resolve_config(
    path: Option<&Path>,
    bind_override: Option<&str>,
) -> Result<ServiceConfig, StartupError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(address) = bind_override {
        config.listener.bind_address = address.to_string();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Bind the TCP listener for `config`.
pub async fn bind_listener(config: &ServiceConfig) -> Result<TcpListener, StartupError> {
    let address = &config.listener.bind_address;
    TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })
}
