//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! HTTP layer:
//!     → tower-http TraceLayer (request/response spans)
//! ```

pub mod logging;
