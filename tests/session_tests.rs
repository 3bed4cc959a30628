mod common;

use common::{SORTED_SEED, names, quiet_session, session};
use medcabinet::config::Config;
use medcabinet::core::boundary::{RecoveryBoundary, Turn};
use medcabinet::core::store::StoreHandle;
use medcabinet::errors::AppError;
use medcabinet::models::StatusFilter;
use medcabinet::models::seed::seed_prescriptions;
use medcabinet::ui::cabinet::{render_cabinet, render_detail, render_table};
use medcabinet::utils::chunk;

#[test]
fn test_session_starts_sorted_and_unfiltered() {
    let s = session();

    assert_eq!(names(&s.visible().unwrap()), SORTED_SEED);
    assert_eq!(s.filters().status(), StatusFilter::Any);
    assert!(!s.detail().is_open());
}

#[test]
fn test_store_handle_dies_with_session() {
    let handle: StoreHandle = {
        let s = quiet_session();
        s.store().clone()
    };

    assert!(matches!(handle.get_all(), Err(AppError::OutsideScope)));
}

#[test]
fn test_auto_refill_through_session_is_logged() {
    let mut s = quiet_session();
    s.show("5").unwrap();

    assert!(s.set_auto_refill(true).unwrap());
    assert!(s.selected().unwrap().unwrap().auto_refill);

    let entry = s.log().entries().last().unwrap();
    assert_eq!(entry.operation, "patch");
    assert_eq!(entry.target, "5");
    assert!(s.log().render().contains("auto-refill on"));
}

#[test]
fn test_filter_changes_are_logged() {
    let mut s = quiet_session();
    s.filter_status(StatusFilter::Active).unwrap();
    s.reset_filters().unwrap();

    let ops: Vec<&str> = s.log().entries().iter().map(|e| e.operation.as_str()).collect();
    assert_eq!(ops, ["filter", "reset"]);
    assert!(s.log().entries()[0].message.contains("status=Active"));
}

#[test]
fn test_custom_dataset() {
    let data: Vec<_> = seed_prescriptions().into_iter().take(3).collect();
    let s = medcabinet::core::Session::with_dataset(
        Config::default(),
        medcabinet::ui::MemoryNotifier::new(),
        data,
    )
    .unwrap();

    assert_eq!(names(&s.visible().unwrap()), ["Atorvastatin", "Lisinopril", "Metformin"]);
    assert_eq!(s.notifier().history().len(), 1);
}

#[test]
fn test_boundary_passes_values_through() {
    let mut boundary = RecoveryBoundary::new();

    let turn = boundary.run(|| Ok(7));

    assert!(matches!(turn, Turn::Done(7)));
    assert!(!boundary.is_crashed());
}

#[test]
fn test_boundary_recovers_from_usage_errors() {
    let mut boundary = RecoveryBoundary::new();

    let turn: Turn<()> = boundary.run(|| Err(AppError::NoPendingDeletion));

    assert!(matches!(turn, Turn::Failed(AppError::NoPendingDeletion)));
    assert!(!boundary.is_crashed());
}

#[test]
fn test_boundary_crashes_on_scope_errors_and_panics() {
    let mut boundary = RecoveryBoundary::new();

    let turn: Turn<()> = boundary.run(|| StoreHandle::default().get_all().map(|_| ()));
    assert!(matches!(turn, Turn::Crashed(_)));
    assert!(boundary.is_crashed());

    boundary.restart();
    assert!(!boundary.is_crashed());

    let turn: Turn<()> = boundary.run(|| panic!("label printer jammed"));
    match turn {
        Turn::Crashed(reason) => assert!(reason.contains("label printer jammed")),
        other => panic!("unexpected turn {other:?}"),
    }
}

#[test]
fn test_chunk_into_shelves() {
    let shelves = chunk(&[1, 2, 3, 4, 5], 2);
    assert_eq!(shelves, vec![vec![1, 2], vec![3, 4], vec![5]]);
    assert_eq!(chunk(&[1, 2], 0), vec![vec![1], vec![2]]);
    assert!(chunk::<u8>(&[], 3).is_empty());
}

#[test]
fn test_rendering_mentions_every_record() {
    let cfg = Config::default();
    let list = seed_prescriptions();

    let table = render_table(&list, &cfg);
    let cabinet = render_cabinet(&list, &cfg);
    for p in &list {
        assert!(table.contains(&p.name), "table lacks {}", p.name);
    }
    // 11 bottles on shelves of 4: three shelves
    assert_eq!(cabinet.matches('▀').count(), 3 * 4 * (cfg.label_width + 1));
    assert!(cabinet.contains("#11"));
}

#[test]
fn test_detail_card_fields() {
    let cfg = Config::default();
    let list = seed_prescriptions();
    let metformin = list.iter().find(|p| p.id == "2").unwrap();

    let card = render_detail(metformin, &cfg);

    assert!(card.contains("Metformin"));
    assert!(card.contains("2023-09-15"));
    assert!(card.contains("Take 2 tablets daily"));
    assert!(card.contains("Not Eligible"));
    assert!(card.contains("Notify Refill"));
}
