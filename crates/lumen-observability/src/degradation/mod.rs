pub mod tracker;

pub use tracker::{DegradationTracker, RecoveryStatus, TrackedDegradation, DEFAULT_MAX_EVENTS};

/// Component names recorded by the engines.
pub mod components {
    pub const POST_AUGMENTATION: &str = "post-augmentation";
    pub const USER_AUGMENTATION: &str = "user-augmentation";
    pub const TREND_FETCH: &str = "trend-fetch";
    pub const TREND_STORAGE: &str = "trend-storage";
}
