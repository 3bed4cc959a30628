use medcabinet::core::store::{StoreHandle, StoreProvider};
use medcabinet::errors::AppError;
use medcabinet::models::PrescriptionPatch;
use medcabinet::models::seed::seed_prescriptions;

#[test]
fn test_get_all_returns_list_as_set() {
    let provider = StoreProvider::new(Vec::new());
    let store = provider.handle();

    let mut list = seed_prescriptions();
    list.reverse();
    store.replace_all(list.clone()).unwrap();

    assert_eq!(store.get_all().unwrap(), list);
}

#[test]
fn test_replace_all_twice_is_same_as_once() {
    let provider = StoreProvider::new(Vec::new());
    let store = provider.handle();
    let list = seed_prescriptions();

    store.replace_all(list.clone()).unwrap();
    let once = store.get_all().unwrap();
    store.replace_all(list.clone()).unwrap();

    assert_eq!(store.get_all().unwrap(), once);
    assert_eq!(store.len().unwrap(), 11);
}

#[test]
fn test_patch_touches_only_the_matching_record() {
    let provider = StoreProvider::new(seed_prescriptions());
    let store = provider.handle();
    let before = store.get_all().unwrap();

    let patch = PrescriptionPatch {
        auto_refill: Some(true),
        quantity: Some(90),
        ..Default::default()
    };
    assert!(store.patch("5", &patch).unwrap());
    assert!(store.patch("9", &PrescriptionPatch::auto_refill(false)).unwrap());

    let after = store.get_all().unwrap();
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(&after) {
        assert_eq!(old.id, new.id, "order must be preserved");
        match new.id.as_str() {
            "5" => {
                assert!(new.auto_refill);
                assert_eq!(new.quantity, 90);
                assert_eq!(new.name, old.name);
                assert_eq!(new.refills, old.refills);
            }
            "9" => assert!(!new.auto_refill),
            _ => assert_eq!(old, new),
        }
    }
}

#[test]
fn test_patch_unknown_id_is_a_silent_noop() {
    let provider = StoreProvider::new(seed_prescriptions());
    let store = provider.handle();
    let before = store.get_all().unwrap();

    let patched = store
        .patch("does-not-exist", &PrescriptionPatch::auto_refill(true))
        .unwrap();

    assert!(!patched);
    assert_eq!(store.get_all().unwrap(), before);
}

#[test]
fn test_empty_patch_changes_nothing() {
    let provider = StoreProvider::new(seed_prescriptions());
    let store = provider.handle();
    let before = store.get_all().unwrap();

    let patch = PrescriptionPatch::default();
    assert!(patch.is_empty());
    assert!(store.patch("1", &patch).unwrap());
    assert_eq!(store.get_all().unwrap(), before);
}

#[test]
fn test_find_by_id() {
    let provider = StoreProvider::new(seed_prescriptions());
    let store = provider.handle();

    assert_eq!(store.find("8").unwrap().unwrap().name, "Gabapentin");
    assert!(store.find("42").unwrap().is_none());
}

#[test]
fn test_detached_handle_fails_fast() {
    let store = StoreHandle::default();

    assert!(matches!(store.get_all(), Err(AppError::OutsideScope)));
    assert!(matches!(
        store.patch("1", &PrescriptionPatch::auto_refill(true)),
        Err(AppError::OutsideScope)
    ));
}

#[test]
fn test_handle_outlived_by_provider_fails_fast() {
    let store = {
        let provider = StoreProvider::new(seed_prescriptions());
        let handle = provider.handle();
        assert_eq!(handle.len().unwrap(), 11);
        handle
    };

    let err = store.replace_all(Vec::new()).unwrap_err();
    assert!(matches!(err, AppError::OutsideScope));
    assert!(err.is_fatal());
    assert!(err.to_string().contains("outside its owning scope"));
}

#[test]
fn test_handles_share_one_list() {
    let provider = StoreProvider::new(seed_prescriptions());
    let a = provider.handle();
    let b = a.clone();

    a.patch("1", &PrescriptionPatch::auto_refill(false)).unwrap();

    assert!(!b.find("1").unwrap().unwrap().auto_refill);
}
