//! Startup region resolution.
//!
//! # Flow
//! ```text
//! Unresolved
//!     → cache hit (non-empty blob)        → Cached
//!     → Probing (all services in parallel)
//!         → first usable label            → Probed (persisted)
//!         → deadline / every probe failed → Unresolved
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::config::RegionConfig;
use crate::region::cache::{BlobStore, FileBlobStore};
use crate::region::geo;
use crate::region::race::race_first;
use crate::region::state::RegionState;

/// Cache key holding the last resolved label.
pub const REGION_CACHE_KEY: &str = "region_cache.txt";

/// Outcome of a resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Adopted from the persisted cache; no network calls were made.
    Cached(String),
    /// Won the live probe race.
    Probed(String),
    /// Nothing usable before the deadline.
    Unresolved,
}

impl Resolution {
    pub fn label(&self) -> Option<&str> {
        match self {
            Resolution::Cached(label) | Resolution::Probed(label) => Some(label.as_str()),
            Resolution::Unresolved => None,
        }
    }
}

/// Resolves the advisory region label.
pub struct RegionResolver {
    cache: Arc<dyn BlobStore>,
    services: Vec<String>,
    probe_timeout: Duration,
    deadline: Duration,
}

impl RegionResolver {
    pub fn new(cache: Arc<dyn BlobStore>, config: &RegionConfig) -> Self {
        Self {
            cache,
            services: config.services.clone(),
            probe_timeout: config.probe_timeout(),
            deadline: config.deadline(),
        }
    }

    /// Resolver persisting to the configured cache directory.
    pub fn from_config(config: &RegionConfig) -> Self {
        let store = FileBlobStore::new(config.resolved_cache_dir());
        tracing::debug!(dir = ?store.dir(), "Region cache directory");
        Self::new(Arc::new(store), config)
    }

    /// Resolve the label. Never fails; the worst case is `Unresolved`.
    pub async fn resolve(&self) -> Resolution {
        if let Some(label) = self.cached_label() {
            return Resolution::Cached(label);
        }

        let label = match self.probe_all().await {
            Some(label) => label,
            None => return Resolution::Unresolved,
        };

        if let Err(e) = self.cache.put(REGION_CACHE_KEY, &label) {
            tracing::debug!(error = %e, "Failed to persist region label");
        }
        Resolution::Probed(label)
    }

    /// Resolve and publish into `state`.
    pub async fn run(self, state: RegionState) -> Resolution {
        let resolution = self.resolve().await;
        match &resolution {
            Resolution::Cached(label) => {
                state.set(label.as_str());
                tracing::info!(region = %label, source = "cache", "Proxy region");
            }
            Resolution::Probed(label) => {
                state.set(label.as_str());
                tracing::info!(region = %label, source = "probe", "Proxy region");
            }
            Resolution::Unresolved => {
                tracing::debug!("Proxy region unresolved");
            }
        }
        resolution
    }

    fn cached_label(&self) -> Option<String> {
        match self.cache.get(REGION_CACHE_KEY) {
            Ok(label) => label.filter(|label| !label.is_empty()),
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read region cache");
                None
            }
        }
    }

    async fn probe_all(&self) -> Option<String> {
        let client = match reqwest::Client::builder().timeout(self.probe_timeout).build() {
            Ok(client) => client,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to build geolocation client");
                return None;
            }
        };

        let probe_timeout = self.probe_timeout;
        let probes: Vec<_> = self
            .services
            .iter()
            .map(|service| {
                let client = client.clone();
                let service = service.clone();
                async move { geo::probe(&client, &service, probe_timeout).await }
            })
            .collect();

        race_first(probes, self.deadline).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        blobs: Mutex<HashMap<String, String>>,
    }

    impl BlobStore for MemoryStore {
        fn get(&self, key: &str) -> io::Result<Option<String>> {
            Ok(self.blobs.lock().unwrap().get(key).cloned())
        }

        fn put(&self, key: &str, value: &str) -> io::Result<()> {
            self.blobs.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl BlobStore for BrokenStore {
        fn get(&self, _key: &str) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }

        fn put(&self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    fn unreachable_services() -> RegionConfig {
        RegionConfig {
            // Port 9 on loopback refuses connections immediately
            services: vec!["http://127.0.0.1:9/json".into()],
            probe_timeout_ms: 200,
            deadline_ms: 300,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_cache_hit_skips_probes() {
        let store = Arc::new(MemoryStore::default());
        store.put(REGION_CACHE_KEY, "Paris, France").unwrap();

        let resolver = RegionResolver::new(store, &unreachable_services());
        assert_eq!(resolver.resolve().await, Resolution::Cached("Paris, France".into()));
    }

    #[tokio::test]
    async fn test_empty_cache_blob_is_a_miss() {
        let store = Arc::new(MemoryStore::default());
        store.put(REGION_CACHE_KEY, "").unwrap();

        let resolver = RegionResolver::new(store.clone(), &unreachable_services());
        assert_eq!(resolver.resolve().await, Resolution::Unresolved);
        assert_eq!(store.get(REGION_CACHE_KEY).unwrap().as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_cache_errors_are_absorbed() {
        let resolver = RegionResolver::new(Arc::new(BrokenStore), &unreachable_services());
        assert_eq!(resolver.resolve().await, Resolution::Unresolved);
    }

    #[tokio::test]
    async fn test_run_publishes_cached_label() {
        let store = Arc::new(MemoryStore::default());
        store.put(REGION_CACHE_KEY, "Lisbon, Portugal").unwrap();
        let state = RegionState::new();

        let resolution = RegionResolver::new(store, &unreachable_services())
            .run(state.clone())
            .await;

        assert_eq!(resolution.label(), Some("Lisbon, Portugal"));
        assert_eq!(state.get().unwrap().as_str(), "Lisbon, Portugal");
    }

    #[tokio::test]
    async fn test_run_leaves_state_empty_when_unresolved() {
        let state = RegionState::new();
        let resolution = RegionResolver::new(Arc::new(MemoryStore::default()), &unreachable_services())
            .run(state.clone())
            .await;

        assert_eq!(resolution, Resolution::Unresolved);
        assert!(state.get().is_none());
    }
}
