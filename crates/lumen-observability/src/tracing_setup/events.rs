//! Structured log events shared across crates.

/// A subsystem fell back to a lower-quality mode.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(component, failure, fallback, "degradation triggered");
}

/// A previously degraded subsystem is healthy again.
pub fn degradation_recovered(component: &str) {
    tracing::info!(component, "degradation recovered");
}
