use saferoute::algorithms::gate::{is_in_verified_zone, is_in_verified_zone_lng_lat};
use saferoute::{HazardRecord, HazardStore, LatLng};

fn unit_square_store() -> HazardStore {
    let mut store = HazardStore::new();
    store.ingest("FRI", vec![HazardRecord::from_ring(
        vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]],
        Some("RED"),
    )]);
    store
}

#[test]
fn gate_is_open_without_data() {
    let store = HazardStore::new();
    for p in [LatLng::new(0.0, 0.0), LatLng::new(89.0, -179.0), LatLng::new(1e6, 1e6)] {
        assert!(is_in_verified_zone(&store, p));
    }
    assert!(is_in_verified_zone_lng_lat(&store, [102.2, 6.1]));
}

#[test]
fn gate_checks_polygons_when_loaded() {
    let store = unit_square_store();
    assert!(store.is_in_verified_zone(LatLng::new(0.5, 0.5)));
    assert!(!store.is_in_verified_zone(LatLng::new(5.0, 5.0)));
    assert!(is_in_verified_zone_lng_lat(&store, [0.5, 0.5]));
    assert!(!is_in_verified_zone_lng_lat(&store, [5.0, 5.0]));
}

#[test]
fn gate_reopens_after_reset() {
    let mut store = unit_square_store();
    assert!(!store.is_in_verified_zone(LatLng::new(5.0, 5.0)));
    store.reset();
    assert!(store.is_in_verified_zone(LatLng::new(5.0, 5.0)));
}

#[test]
fn degenerate_only_store_gates_closed() {
    // data exists, so the gate evaluates strictly even though nothing can match
    let mut store = HazardStore::new();
    store.ingest("FRI", vec![HazardRecord::from_ring(vec![[0.5, 0.5]], None)]);
    assert!(!store.is_in_verified_zone(LatLng::new(0.5, 0.5)));
}
