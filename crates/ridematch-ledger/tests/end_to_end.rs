//! Integration test: full round lifecycle
//!
//! REGISTER → CONFIGURE → MATRIX → ASSIGN
//!
//! Tests the complete flow from user registration through matrix
//! construction to committed assignments on the ledger store.

use ridematch_ledger::{
    MemoryStore, load_matrix, registry, run_assignment_phase, run_matrix_phase,
};
use ridematch_routing::FixtureRouter;
use ridematch_types::{GeoPoint, RidematchError, Role, TxId, UserId};

const A: GeoPoint = GeoPoint::new(0.0, 0.00);
const B: GeoPoint = GeoPoint::new(0.0, 0.04);

fn id(s: &str) -> UserId {
    UserId::from(s)
}

/// A store with one zero-threshold driver on the A -> B corridor and one
/// rider whose endpoints sit exactly on its interior nodes.
fn corridor_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    registry::create_user(&mut store, &id("d1")).unwrap();
    registry::create_user(&mut store, &id("r1")).unwrap();
    registry::configure_ride(&mut store, &id("d1"), A, B, Role::Driver, 2, 0, 0.0).unwrap();
    registry::configure_ride(
        &mut store,
        &id("r1"),
        GeoPoint::new(0.0, 0.01),
        GeoPoint::new(0.0, 0.03),
        Role::Rider,
        0,
        0,
        1.0,
    )
    .unwrap();
    store
}

fn corridor_router() -> FixtureRouter {
    let mut router = FixtureRouter::new();
    router.line(A, B, 5);
    router
}

#[test]
fn full_round_cycle() {
    let mut store = corridor_store();
    let router = corridor_router();

    // =====================================================================
    // MATRIX: one driver, one rider, eligible
    // =====================================================================
    let matrix = run_matrix_phase(&mut store, &router).unwrap();
    assert_eq!(matrix.driver_count(), 1);
    assert_eq!(matrix.rider_count(), 1);
    assert!(matrix.get(0, 0));
    assert_eq!(load_matrix(&store).unwrap(), matrix);

    // =====================================================================
    // ASSIGN: fare moves, seat consumed, paths committed
    // =====================================================================
    let mutated = run_assignment_phase(&mut store, &router, &TxId::from("round-1")).unwrap();
    assert_eq!(mutated, vec![id("d1"), id("r1")]);

    let d1 = registry::read_user(&store, &id("d1")).unwrap();
    assert!(d1.assigned);
    assert_eq!(d1.token, 12);
    assert_eq!(d1.seats, 1);
    assert_eq!(d1.riders.len(), 1);
    assert_eq!(d1.riders[0].id, id("r1"));
    assert_eq!(d1.path.len(), 5);
    assert_eq!(d1.path[0], A);
    assert_eq!(d1.path[4], B);

    let r1 = registry::read_user(&store, &id("r1")).unwrap();
    assert!(r1.assigned);
    assert_eq!(r1.token, 8);
    let driver_ref = r1.driver.as_ref().unwrap();
    assert_eq!(driver_ref.id, id("d1"));
    assert_eq!(driver_ref.boarding, GeoPoint::new(0.0, 0.01));
    assert_eq!(driver_ref.alighting, GeoPoint::new(0.0, 0.03));
    // The matched sub-route: interior nodes 1 through 3 inclusive.
    assert_eq!(r1.path, vec![
        GeoPoint::new(0.0, 0.01),
        GeoPoint::new(0.0, 0.02),
        GeoPoint::new(0.0, 0.03),
    ]);

    assert_eq!(registry::unassigned_count(&store).unwrap(), 0);
}

#[test]
fn assigned_users_make_the_next_round_a_noop() {
    let mut store = corridor_store();
    let router = corridor_router();

    run_matrix_phase(&mut store, &router).unwrap();
    run_assignment_phase(&mut store, &router, &TxId::from("round-1")).unwrap();
    let before = store.clone();

    // Everyone is assigned: the next assignment short-circuits before even
    // touching the matrix, and writes nothing.
    let mutated = run_assignment_phase(&mut store, &router, &TxId::from("round-2")).unwrap();
    assert!(mutated.is_empty());
    assert_eq!(store, before);
}

#[test]
fn assignment_without_a_matrix_is_rejected() {
    let mut store = corridor_store();
    let router = corridor_router();

    let err = run_assignment_phase(&mut store, &router, &TxId::from("round-1")).unwrap_err();
    assert!(matches!(err, RidematchError::MatrixMissing));
}

#[test]
fn routing_outage_leaves_the_previous_matrix_intact() {
    let mut store = corridor_store();
    let mut router = corridor_router();

    let first = run_matrix_phase(&mut store, &router).unwrap();

    // The corridor goes dark: the rebuild fails wholesale and the persisted
    // matrix is still the previous round's.
    router.remove(A, B);
    let err = run_matrix_phase(&mut store, &router).unwrap_err();
    assert!(matches!(err, RidematchError::RoutingUnavailable { .. }));
    assert_eq!(load_matrix(&store).unwrap(), first);
}

#[test]
fn stale_matrix_is_rejected_after_population_change() {
    let mut store = corridor_store();
    let router = corridor_router();

    run_matrix_phase(&mut store, &router).unwrap();

    // A rider configures between the phases: the snapshot no longer matches
    // the persisted matrix shape.
    registry::create_user(&mut store, &id("r2")).unwrap();
    registry::configure_ride(
        &mut store,
        &id("r2"),
        GeoPoint::new(0.0, 0.01),
        GeoPoint::new(0.0, 0.03),
        Role::Rider,
        0,
        0,
        1.0,
    )
    .unwrap();

    let err = run_assignment_phase(&mut store, &router, &TxId::from("round-1")).unwrap_err();
    assert!(matches!(err, RidematchError::MatrixShapeMismatch { .. }));
}

#[test]
fn unconfigured_users_never_enter_a_round() {
    let mut store = corridor_store();
    let router = corridor_router();

    // Registered but never configured: no role, so not a participant.
    registry::create_user(&mut store, &id("lurker")).unwrap();

    let matrix = run_matrix_phase(&mut store, &router).unwrap();
    assert_eq!(matrix.driver_count(), 1);
    assert_eq!(matrix.rider_count(), 1);

    run_assignment_phase(&mut store, &router, &TxId::from("round-1")).unwrap();
    let lurker = registry::read_user(&store, &id("lurker")).unwrap();
    assert!(!lurker.assigned);
    assert_eq!(lurker.token, 10);
}
