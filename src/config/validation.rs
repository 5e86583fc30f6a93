//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, port valid)
//! - Check that region service URLs parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.port must be non-zero")]
    ZeroPort,

    #[error("region.services must not be empty when region resolution is enabled")]
    NoRegionServices,

    #[error("region service is not a valid URL: {0}")]
    InvalidRegionService(String),

    #[error("region.{0} must be non-zero")]
    ZeroDuration(&'static str),

    #[error("region.deadline_ms ({deadline_ms}) is shorter than region.probe_timeout_ms ({probe_timeout_ms})")]
    DeadlineBeforeProbeTimeout { deadline_ms: u64, probe_timeout_ms: u64 },
}

/// Validate a fully merged configuration.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    // The default target is not checked here: a bad origin is a per-request 400

    let region = &config.region;
    if region.enabled {
        if region.services.is_empty() {
            errors.push(ValidationError::NoRegionServices);
        }
        for service in &region.services {
            if Url::parse(service).is_err() {
                errors.push(ValidationError::InvalidRegionService(service.clone()));
            }
        }
        if region.probe_timeout_ms == 0 {
            errors.push(ValidationError::ZeroDuration("probe_timeout_ms"));
        }
        if region.deadline_ms == 0 {
            errors.push(ValidationError::ZeroDuration("deadline_ms"));
        }
        if region.deadline_ms < region.probe_timeout_ms {
            errors.push(ValidationError::DeadlineBeforeProbeTimeout {
                deadline_ms: region.deadline_ms,
                probe_timeout_ms: region.probe_timeout_ms,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
