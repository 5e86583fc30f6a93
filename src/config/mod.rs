//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment + .env file
//!     → env_file.rs (layered lookup, process wins)
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize, apply PORT / TARGET_API_URL)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so no file is required
//! - Validation separates syntactic (serde) from semantic checks

pub mod env_file;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env_file::EnvVars;
pub use loader::{load_config, ConfigError};
pub use schema::ListenerConfig;
pub use schema::ProxyConfig;
pub use schema::RegionConfig;
pub use schema::UpstreamConfig;
