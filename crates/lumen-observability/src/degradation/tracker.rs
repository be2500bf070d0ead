//! Record degradation events: component, failure mode, fallback used, timestamp, recovery status.
//!
//! The log is bounded. Once full, the oldest recovered event is dropped to
//! make room, or the oldest event outright when none has recovered.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use lumen_core::models::DegradationEvent;
use serde::{Deserialize, Serialize};

/// Recovery status of a degradation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Still in degraded mode.
    Active,
    /// Recovered to normal operation.
    Recovered,
}

/// A tracked degradation event with recovery status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

/// Events kept by [`DegradationTracker::new`].
pub const DEFAULT_MAX_EVENTS: usize = 256;

/// Tracks degradation events. Shared between engines behind an `Arc`, so
/// every method takes `&self`.
#[derive(Debug)]
pub struct DegradationTracker {
    events: Mutex<VecDeque<TrackedDegradation>>,
    max_events: usize,
}

impl Default for DegradationTracker {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_EVENTS)
    }
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker keeping at most `max_events` events (at least one).
    pub fn with_capacity(max_events: usize) -> Self {
        let max_events = max_events.max(1);
        Self {
            events: Mutex::new(VecDeque::with_capacity(max_events.min(DEFAULT_MAX_EVENTS))),
            max_events,
        }
    }

    pub fn capacity(&self) -> usize {
        self.max_events
    }

    fn events_mut(&self) -> MutexGuard<'_, VecDeque<TrackedDegradation>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record a new degradation event.
    pub fn record(&self, event: DegradationEvent) {
        crate::tracing_setup::events::degradation_triggered(
            &event.component,
            &event.failure,
            &event.fallback_used,
        );
        let mut events = self.events_mut();
        if events.len() >= self.max_events {
            let oldest_recovered = events
                .iter()
                .position(|t| t.recovery_status == RecoveryStatus::Recovered);
            match oldest_recovered {
                Some(index) => {
                    events.remove(index);
                }
                None => {
                    events.pop_front();
                }
            }
        }
        events.push_back(TrackedDegradation {
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
    }

    /// Shorthand for [`record`](Self::record) with the pieces of an event.
    pub fn record_fallback(
        &self,
        component: &str,
        failure: impl Into<String>,
        fallback_used: &str,
        at: DateTime<Utc>,
    ) {
        self.record(DegradationEvent {
            component: component.to_string(),
            failure: failure.into(),
            fallback_used: fallback_used.to_string(),
            timestamp: at,
        });
    }

    /// Mark every active degradation of a component as recovered.
    pub fn mark_recovered(&self, component: &str, at: DateTime<Utc>) {
        let mut recovered = false;
        for tracked in self.events_mut().iter_mut() {
            if tracked.event.component == component
                && tracked.recovery_status == RecoveryStatus::Active
            {
                tracked.recovery_status = RecoveryStatus::Recovered;
                tracked.recovered_at = Some(at);
                recovered = true;
            }
        }
        if recovered {
            crate::tracing_setup::events::degradation_recovered(component);
        }
    }

    /// Snapshot of the retained events, oldest first.
    pub fn events(&self) -> Vec<TrackedDegradation> {
        self.events_mut().iter().cloned().collect()
    }

    /// Active (unrecovered) degradations.
    pub fn active_degradations(&self) -> Vec<TrackedDegradation> {
        self.events_mut()
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .cloned()
            .collect()
    }

    /// Whether a component currently has an unrecovered degradation.
    pub fn is_degraded(&self, component: &str) -> bool {
        self.events_mut().iter().any(|t| {
            t.event.component == component && t.recovery_status == RecoveryStatus::Active
        })
    }

    /// Count events for a component within `window` before `now`.
    pub fn count_recent(&self, component: &str, window: Duration, now: DateTime<Utc>) -> usize {
        let cutoff = now - window;
        self.events_mut()
            .iter()
            .filter(|t| t.event.component == component && t.event.timestamp > cutoff)
            .count()
    }
}
