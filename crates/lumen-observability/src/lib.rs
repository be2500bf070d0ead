//! # lumen-observability
//!
//! Tracing subscriber setup, span definitions for search and trending
//! operations, and a tracker for degradation events (remote fallbacks,
//! stale cache serves).

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use tracing_setup::init_tracing;
