//! Point-in-polygon testing for hazard rings.
//!
//! Casts a horizontal ray from the point toward increasing longitude and
//! counts edge crossings; odd parity means inside. Latitude plays the role of
//! `y`, longitude of `x`. There is no tolerance, so a point exactly on an edge
//! may land on either side depending on edge direction.

use crate::model::LatLng;

/// Even-odd containment of `p` in the closed ring `ring`.
///
/// Rings with fewer than three vertices never contain anything.
pub fn contains(p: LatLng, ring: &[LatLng]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[j];
        // Strict on one side only, so a vertex on the ray counts once
        if (a.lat > p.lat) != (b.lat > p.lat) {
            let lng_at = (b.lng - a.lng) * (p.lat - a.lat) / (b.lat - a.lat) + a.lng;
            if p.lng < lng_at {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// True when any ring contains `p`.
pub fn contains_any<'a, I>(p: LatLng, rings: I) -> bool
where
    I: IntoIterator<Item = &'a [LatLng]>,
{
    rings.into_iter().any(|r| contains(p, r))
}
