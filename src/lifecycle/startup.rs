//! Startup orchestration.
//!
//! # Responsibilities
//! - Start region resolution in the background
//! - Bind the listener (the only fatal runtime failure)
//! - Run the HTTP server until shutdown
//!
//! # Design Decisions
//! - Serving never waits for region resolution
//! - Region resolution failures are absorbed, never fatal

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::config::{ProxyConfig, RegionConfig};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::region::{RegionResolver, RegionState, Resolution};

/// Errors that stop the proxy.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Resolve the region on a detached task and publish it into `state`.
///
/// Returns `None` when region resolution is disabled.
pub fn spawn_region_resolution(
    config: &RegionConfig,
    state: RegionState,
) -> Option<JoinHandle<Resolution>> {
    if !config.enabled {
        tracing::info!("Region resolution disabled");
        return None;
    }

    let resolver = RegionResolver::from_config(config);
    Some(tokio::spawn(resolver.run(state)))
}

/// Bind the configured address and serve until `shutdown` fires.
pub async fn run(config: ProxyConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    let region = RegionState::new();
    spawn_region_resolution(&config.region, region.clone());

    let address = config.listener.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;

    tracing::info!(address = %address, "Reliable Proxy running");

    HttpServer::new(config, region)
        .run(listener, shutdown.subscribe())
        .await?;
    Ok(())
}
