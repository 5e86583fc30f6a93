//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::env_file::EnvVars;
use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Variable naming the listener port.
pub const PORT_VAR: &str = "PORT";

/// Variable naming the process-wide default origin.
pub const TARGET_API_URL_VAR: &str = "TARGET_API_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration.
///
/// Starts from the TOML file at `path` (or defaults when `None`), then
/// applies `PORT` and `TARGET_API_URL` from `env`.
pub fn load_config(path: Option<&Path>, env: &EnvVars) -> Result<ProxyConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ProxyConfig::default(),
    };

    apply_env(&mut config, env)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides onto a parsed configuration.
pub fn apply_env(config: &mut ProxyConfig, env: &EnvVars) -> Result<(), ConfigError> {
    if let Some(port) = env.get(PORT_VAR) {
        config.listener.port = port.trim().parse().map_err(|_| ConfigError::InvalidVar {
            var: PORT_VAR,
            value: port.to_string(),
        })?;
    }

    if let Some(target) = env.get(TARGET_API_URL_VAR) {
        config.upstream.default_target = Some(target.to_string());
    }

    Ok(())
}
