//! Least-risk route selection.

use crate::algorithms::sampling::{sample_points, score};
use crate::error::{Error, Result};
use crate::model::{RouteCandidate, ScoredRoute};
use crate::HazardStore;

/// Score every candidate and order them by hit count, keeping input order among ties.
pub fn rank<M>(
    candidates: Vec<RouteCandidate<M>>,
    store: &HazardStore,
    budget: usize,
) -> Vec<ScoredRoute<M>> {
    let mut scored: Vec<ScoredRoute<M>> = candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            let hits = score(&candidate.path, store, budget);
            let samples = sample_points(&candidate.path, budget).collect();
            ScoredRoute { index, candidate, hits, samples }
        })
        .collect();
    // stable: the provider's own ordering breaks ties
    scored.sort_by_key(|s| s.hits);
    scored
}

/// The candidate with the fewest hits; the earliest one wins a tie.
pub fn select_best<M>(
    candidates: Vec<RouteCandidate<M>>,
    store: &HazardStore,
    budget: usize,
) -> Result<ScoredRoute<M>> {
    if candidates.is_empty() {
        return Err(Error::InvalidInput("no route candidates".into()));
    }
    let count = candidates.len();
    let best = rank(candidates, store, budget)
        .into_iter()
        .next()
        .ok_or_else(|| Error::InvalidInput("no route candidates".into()))?;
    tracing::debug!(candidates = count, index = best.index, hits = best.hits, "selected route");
    Ok(best)
}
