//! Route risk scoring by stride sampling.
//!
//! At most `budget` points (plus remainder) are tested per path, so a count of
//! zero means no overlap among the samples, not that the path is clear.

use crate::model::LatLng;
use crate::HazardStore;

/// Stride between sampled indices: `max(1, len / budget)`.
#[inline]
pub fn sample_stride(len: usize, budget: usize) -> usize {
    (len / budget.max(1)).max(1)
}

/// Points of `path` visited by the scorer, in path order.
pub fn sample_points(path: &[LatLng], budget: usize) -> impl Iterator<Item = LatLng> + '_ {
    path.iter().copied().step_by(sample_stride(path.len(), budget))
}

/// Number of sampled points of `path` that fall inside any hazard.
pub fn score(path: &[LatLng], store: &HazardStore, budget: usize) -> usize {
    if path.is_empty() || store.is_empty() {
        return 0;
    }
    sample_points(path, budget)
        .filter(|p| store.contains_point(*p))
        .count()
}
