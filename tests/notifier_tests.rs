mod common;

use common::session;
use medcabinet::config::Config;
use medcabinet::core::Session;
use medcabinet::core::notifier::{ALERT_TITLE, LowQuantityNotifier, low_quantity};
use medcabinet::core::store::StoreProvider;
use medcabinet::models::seed::seed_prescriptions;
use medcabinet::ui::{MemoryNotifier, NoticeKind, Notifier};

const EXPECTED: [&str; 5] = [
    "Metformin: 3",
    "Sertraline: 4",
    "Levothyroxine: 2",
    "Escitalopram: 3",
    "Hydrochlorothiazide: 4",
];

#[test]
fn test_seed_low_quantity_records() {
    let seed = seed_prescriptions();
    let low: Vec<&str> = low_quantity(&seed, 5)
        .into_iter()
        .map(|p| p.name.as_str())
        .collect();

    assert_eq!(
        low,
        [
            "Metformin",
            "Sertraline",
            "Levothyroxine",
            "Escitalopram",
            "Hydrochlorothiazide"
        ]
    );
}

#[test]
fn test_single_sticky_alert_lists_the_five() {
    let provider = StoreProvider::new(seed_prescriptions());
    let store = provider.handle();
    let mut alerts = LowQuantityNotifier::default();
    let mut notifier = MemoryNotifier::new();

    let handle = alerts.check(&store, &mut notifier).unwrap();

    assert!(handle.is_some());
    assert_eq!(notifier.history().len(), 1);
    let notice = &notifier.history()[0];
    assert_eq!(notice.kind, NoticeKind::Warning);
    assert_eq!(notice.message, ALERT_TITLE);
    assert!(notice.options.sticky);
    assert_eq!(notice.options.description, EXPECTED);
    assert_eq!(notifier.sticky().len(), 1);
}

#[test]
fn test_alert_never_fires_twice() {
    let provider = StoreProvider::new(seed_prescriptions());
    let store = provider.handle();
    let mut alerts = LowQuantityNotifier::default();
    let mut notifier = MemoryNotifier::new();

    alerts.check(&store, &mut notifier).unwrap();
    for _ in 0..3 {
        store.replace_all(seed_prescriptions()).unwrap();
        assert!(alerts.check(&store, &mut notifier).unwrap().is_none());
    }

    assert_eq!(notifier.count(NoticeKind::Warning), 1);
}

#[test]
fn test_dismiss_does_not_rearm() {
    let provider = StoreProvider::new(seed_prescriptions());
    let store = provider.handle();
    let mut alerts = LowQuantityNotifier::default();
    let mut notifier = MemoryNotifier::new();

    let handle = alerts.check(&store, &mut notifier).unwrap().unwrap();
    assert!(notifier.dismiss(handle));
    assert!(!notifier.dismiss(handle));
    assert!(notifier.sticky().is_empty());

    assert!(alerts.check(&store, &mut notifier).unwrap().is_none());
    assert_eq!(notifier.history().len(), 1);
}

#[test]
fn test_nothing_low_consumes_the_guard() {
    let mut healthy = seed_prescriptions();
    for p in &mut healthy {
        p.quantity = 50;
    }
    let provider = StoreProvider::new(healthy);
    let store = provider.handle();
    let mut alerts = LowQuantityNotifier::default();
    let mut notifier = MemoryNotifier::new();

    assert!(alerts.check(&store, &mut notifier).unwrap().is_none());
    assert!(alerts.has_run());

    // supply drops later: still silent for the rest of the session
    store.replace_all(seed_prescriptions()).unwrap();
    assert!(alerts.check(&store, &mut notifier).unwrap().is_none());
    assert!(notifier.history().is_empty());
}

#[test]
fn test_empty_store_defers_the_check() {
    let provider = StoreProvider::new(Vec::new());
    let store = provider.handle();
    let mut alerts = LowQuantityNotifier::default();
    let mut notifier = MemoryNotifier::new();

    assert!(alerts.check(&store, &mut notifier).unwrap().is_none());
    assert!(!alerts.has_run());

    store.replace_all(seed_prescriptions()).unwrap();
    assert!(alerts.check(&store, &mut notifier).unwrap().is_some());
}

#[test]
fn test_inactive_records_are_never_low() {
    let mut seed = seed_prescriptions();
    let gabapentin = seed.iter_mut().find(|p| p.name == "Gabapentin").unwrap();
    gabapentin.quantity = 1;

    assert!(low_quantity(&seed, 5).iter().all(|p| p.name != "Gabapentin"));
}

#[test]
fn test_threshold_comes_from_config() {
    let cfg = Config {
        low_quantity_threshold: 3,
        ..Config::default()
    };
    let s = Session::new(cfg, MemoryNotifier::new()).unwrap();

    let notice = &s.notifier().history()[0];
    assert_eq!(notice.options.description, ["Levothyroxine: 2"]);
}

#[test]
fn test_session_alert_fires_once_across_filters() {
    let mut s = session();
    s.filter_category("Diabetes").unwrap();
    s.reset_filters().unwrap();
    s.check_alerts().unwrap();

    assert_eq!(s.notifier().count(NoticeKind::Warning), 1);
    assert_eq!(s.dismiss_alerts(), 1);
    assert!(s.notifier().sticky().is_empty());
}

#[test]
fn test_alert_can_be_disabled() {
    let cfg = Config {
        low_quantity_alert: false,
        ..Config::default()
    };
    let s = Session::new(cfg, MemoryNotifier::new()).unwrap();

    assert!(s.notifier().history().is_empty());
}
