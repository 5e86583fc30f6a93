//! Forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → target.rs (origin from header or default, status short-circuit,
//!                  outbound URL)
//!     → headers.rs (drop host / target-api-url, keep the rest)
//!     → forward.rs (fresh transport from tls.rs, streamed body, dispatch)
//!     → forward.rs (relay status, headers, streamed body)
//!
//! any failure → error.rs (JSON error body with 400 / 500)
//! ```

pub mod error;
pub mod forward;
pub mod headers;
pub mod target;
pub mod tls;

pub use error::ProxyError;
pub use forward::forward;
pub use target::{route, Route, TARGET_HEADER};
