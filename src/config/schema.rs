//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration for the proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// Upstream selection.
    pub upstream: UpstreamConfig,

    /// Region resolution at startup.
    pub region: RegionConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// TCP port. Overridden by `PORT`.
    pub port: u16,
}

impl ListenerConfig {
    /// Socket address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Upstream selection settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Origin used when a request carries no `target-api-url` header.
    /// Overridden by `TARGET_API_URL`.
    pub default_target: Option<String>,
}

/// Region resolution settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Resolve the region label at startup.
    pub enabled: bool,

    /// Geolocation services queried concurrently.
    pub services: Vec<String>,

    /// Per-probe timeout in milliseconds.
    pub probe_timeout_ms: u64,

    /// Overall race deadline in milliseconds.
    pub deadline_ms: u64,

    /// Directory holding the cached label. Defaults to `/app/data` when it
    /// exists, otherwise the working directory.
    pub cache_dir: Option<PathBuf>,
}

impl RegionConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    /// Cache directory after applying the `/app/data` fallback.
    pub fn resolved_cache_dir(&self) -> PathBuf {
        if let Some(dir) = &self.cache_dir {
            return dir.clone();
        }
        let data_dir = PathBuf::from(DATA_DIR);
        if data_dir.is_dir() {
            data_dir
        } else {
            PathBuf::from(".")
        }
    }
}

/// Preferred location for persisted state inside containers.
pub const DATA_DIR: &str = "/app/data";

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            services: vec![
                "https://ipapi.co/json/".to_string(),
                "https://ipinfo.io/json".to_string(),
            ],
            probe_timeout_ms: 3000,
            deadline_ms: 3100,
            cache_dir: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "reliable_proxy=info,tower_http=info".to_string(),
        }
    }
}
