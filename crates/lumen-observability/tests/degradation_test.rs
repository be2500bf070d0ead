use chrono::{Duration, TimeZone, Utc};
use lumen_core::config::ObservabilityConfig;
use lumen_observability::degradation::{components, DEFAULT_MAX_EVENTS};
use lumen_observability::{init_tracing, DegradationTracker, RecoveryStatus};

#[test]
fn records_and_recovers_component() {
    let tracker = DegradationTracker::new();
    let t0 = Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap();

    tracker.record_fallback(components::TREND_FETCH, "connection refused", "stale cache", t0);
    assert!(tracker.is_degraded(components::TREND_FETCH));
    assert_eq!(tracker.active_degradations().len(), 1);

    tracker.mark_recovered(components::TREND_FETCH, t0 + Duration::minutes(1));
    assert!(!tracker.is_degraded(components::TREND_FETCH));
    let events = tracker.events();
    assert_eq!(events[0].recovery_status, RecoveryStatus::Recovered);
    assert_eq!(events[0].recovered_at, Some(t0 + Duration::minutes(1)));
}

#[test]
fn recovery_is_per_component() {
    let tracker = DegradationTracker::new();
    let now = Utc::now();
    tracker.record_fallback(components::POST_AUGMENTATION, "timeout", "local corpus", now);
    tracker.record_fallback(components::USER_AUGMENTATION, "timeout", "local corpus", now);

    tracker.mark_recovered(components::POST_AUGMENTATION, now);
    assert!(!tracker.is_degraded(components::POST_AUGMENTATION));
    assert!(tracker.is_degraded(components::USER_AUGMENTATION));
}

#[test]
fn count_recent_respects_window() {
    let tracker = DegradationTracker::new();
    let now = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();
    tracker.record_fallback(components::TREND_FETCH, "a", "stale", now - Duration::hours(2));
    tracker.record_fallback(components::TREND_FETCH, "b", "stale", now - Duration::minutes(5));

    assert_eq!(tracker.count_recent(components::TREND_FETCH, Duration::hours(1), now), 1);
    assert_eq!(tracker.count_recent(components::TREND_FETCH, Duration::hours(3), now), 2);
    assert_eq!(tracker.count_recent(components::TREND_STORAGE, Duration::hours(3), now), 0);
}

#[test]
fn invalid_log_level_is_a_config_error() {
    // RUST_LOG takes precedence, so only assert when it is unset.
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    let config = ObservabilityConfig {
        log_level: "lumen=loudest".into(),
        json_logs: false,
    };
    assert!(init_tracing(&config).is_err());
}

#[test]
fn event_log_stays_bounded() {
    let tracker = DegradationTracker::with_capacity(16);
    let t0 = Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap();
    for i in 0..1_000 {
        tracker.record_fallback(
            components::POST_AUGMENTATION,
            format!("timeout #{i}"),
            "local corpus",
            t0 + Duration::seconds(i),
        );
    }

    let events = tracker.events();
    assert_eq!(events.len(), 16);
    assert_eq!(events[0].event.failure, "timeout #984");
    assert_eq!(events[15].event.failure, "timeout #999");
    assert!(tracker.is_degraded(components::POST_AUGMENTATION));
}

#[test]
fn full_log_drops_recovered_events_first() {
    let tracker = DegradationTracker::with_capacity(3);
    let now = Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap();
    tracker.record_fallback(components::TREND_STORAGE, "disk full", "cache miss", now);
    tracker.record_fallback(components::TREND_FETCH, "offline", "empty list", now);
    tracker.mark_recovered(components::TREND_FETCH, now);
    tracker.record_fallback(components::USER_AUGMENTATION, "timeout", "local corpus", now);
    tracker.record_fallback(components::POST_AUGMENTATION, "timeout", "local corpus", now);

    let components_kept: Vec<String> =
        tracker.events().into_iter().map(|t| t.event.component).collect();
    assert_eq!(
        components_kept,
        vec![
            components::TREND_STORAGE,
            components::USER_AUGMENTATION,
            components::POST_AUGMENTATION,
        ]
    );
    assert!(tracker.is_degraded(components::TREND_STORAGE));
}

#[test]
fn default_capacity_applies() {
    assert_eq!(DegradationTracker::new().capacity(), DEFAULT_MAX_EVENTS);
    assert_eq!(DegradationTracker::with_capacity(0).capacity(), 1);
}
