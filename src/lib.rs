//! Reliable Proxy Library
//!
//! Forwards every request to the origin named by the `target-api-url`
//! header or `TARGET_API_URL`, and reports liveness plus an advisory region
//! label on `/` when no origin is configured.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;
pub mod region;

pub use config::schema::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use region::RegionState;
