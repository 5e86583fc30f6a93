//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Pick the filter from `RUST_LOG` (process or `.env`), else config
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Request bodies and header values are never logged

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::ObservabilityConfig;
use crate::config::EnvVars;

pub const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Build the filter, falling back to the configured default when the
/// environment directive is missing or invalid.
pub fn build_filter(config: &ObservabilityConfig, env: &EnvVars) -> EnvFilter {
    env.get(LOG_FILTER_VAR)
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(&config.log_filter))
}

/// Install the global subscriber.
pub fn init_logging(config: &ObservabilityConfig, env: &EnvVars) {
    tracing_subscriber::registry()
        .with(build_filter(config, env))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
