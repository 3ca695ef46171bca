//! SOS zone gate.
//!
//! With no hazard data loaded the gate stays open: missing data is not
//! evidence of safety, and emergency reporting must never be blocked by it.

use crate::model::LatLng;
use crate::HazardStore;

pub fn is_in_verified_zone(store: &HazardStore, p: LatLng) -> bool {
    if store.is_empty() {
        return true;
    }
    store.contains_point(p)
}

/// Same check for a GeoJSON-ordered `[lng, lat]` position.
#[inline]
pub fn is_in_verified_zone_lng_lat(store: &HazardStore, p: [f64; 2]) -> bool {
    is_in_verified_zone(store, LatLng::from_lng_lat(p))
}
