//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing middleware)
//!     → proxy handler
//!         → status.rs (root path, no origin)
//!         → proxy::forward (everything else)
//!     → Send to client
//! ```

pub mod server;
pub mod status;

pub use server::{AppState, HttpServer};
pub use status::StatusPayload;
