//! Region resolution subsystem.
//!
//! # Data Flow
//! ```text
//! startup (detached task)
//!     → resolver.rs (cache lookup)
//!     → race.rs (one task per service, first label wins, deadline)
//!         → geo.rs (HTTP probe, decode, reduce to label)
//!     → cache.rs (persist probed label, failures ignored)
//!     → state.rs (publish once)
//!
//! status requests
//!     → state.rs (lock-free read)
//! ```
//!
//! # Design Decisions
//! - Resolution never blocks serving and never fails the process
//! - Stragglers are detached, not cancelled
//! - The label is written at most once

pub mod cache;
pub mod geo;
pub mod race;
pub mod resolver;
pub mod state;

pub use cache::{BlobStore, FileBlobStore};
pub use geo::GeoResult;
pub use resolver::{RegionResolver, Resolution, REGION_CACHE_KEY};
pub use state::RegionState;
