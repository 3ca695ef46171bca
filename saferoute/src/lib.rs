pub mod config;
pub mod error;
pub mod model;
pub mod geometry {
    pub mod bounds;
    pub mod limits;
    pub mod polyline;
}
pub mod algorithms {
    pub mod containment;
    pub mod gate;
    pub mod sampling;
    pub mod selection;
}
pub mod json;

pub use config::ScoringConfig;
pub use error::{Error, Result};
pub use model::{
    Bounds, Hazard, HazardRecord, IngestReport, LatLng, Level, RouteCandidate, RouteMeta,
    ScoredRoute, SOURCE_FRI, SOURCE_GEOJSON,
};

use geometry::limits::MAX_RING_POINTS;

/// Session-owned hazard polygons, grouped by the feed they came from.
///
/// Sources are kept in the order they were first ingested. Ingesting a source
/// appends to it and leaves every other source alone; only [`reset`] clears.
///
/// [`reset`]: HazardStore::reset
#[derive(Clone, Debug, Default)]
pub struct HazardStore {
    sources: Vec<(String, Vec<Hazard>)>,
    total: usize,
    version: u64,
    scoring: ScoringConfig,
}

impl HazardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(scoring: ScoringConfig) -> Self {
        HazardStore { scoring, ..Self::default() }
    }

    /// Monotonic; bumps on every ingest that adds hazards and on every reset.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.scoring
    }
    pub fn set_config(&mut self, scoring: ScoringConfig) {
        self.scoring = scoring;
    }
    pub fn set_sample_budget(&mut self, budget: usize) {
        self.scoring.sample_budget = budget;
    }

    // Ingestion

    /// Validate and append `records` under `source`. Bad records are skipped one by one.
    pub fn ingest<I>(&mut self, source: &str, records: I) -> IngestReport
    where
        I: IntoIterator<Item = HazardRecord>,
    {
        let mut report = IngestReport::default();
        let mut accepted = Vec::new();
        for (i, rec) in records.into_iter().enumerate() {
            match validate(source, rec) {
                Ok(h) => accepted.push(h),
                Err(reason) => {
                    report.skipped += 1;
                    tracing::warn!(source, index = i, reason, "skipping malformed hazard record");
                }
            }
        }
        report.accepted = accepted.len();
        if !accepted.is_empty() {
            self.total += accepted.len();
            self.version += 1;
            match self.sources.iter_mut().find(|(tag, _)| tag == source) {
                Some((_, list)) => list.extend(accepted),
                None => self.sources.push((source.to_string(), accepted)),
            }
        }
        tracing::debug!(source, accepted = report.accepted, skipped = report.skipped, "ingested hazards");
        report
    }

    /// Parse an FRI feed document and ingest it under [`SOURCE_FRI`].
    pub fn ingest_fri_value(&mut self, v: &serde_json::Value) -> Result<IngestReport> {
        let records = json::parse_fri_records(v)?;
        Ok(self.ingest(SOURCE_FRI, records))
    }

    /// Parse a GeoJSON FeatureCollection and ingest it under [`SOURCE_GEOJSON`].
    pub fn ingest_geojson_value(&mut self, v: &serde_json::Value) -> Result<IngestReport> {
        let records = json::parse_geojson_records(v)?;
        Ok(self.ingest(SOURCE_GEOJSON, records))
    }

    /// Drop every source. Call once when a new session starts.
    pub fn reset(&mut self) {
        self.sources.clear();
        self.total = 0;
        self.version += 1;
        tracing::debug!("hazard store reset");
    }

    // Queries

    pub fn len(&self) -> usize {
        self.total
    }
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
    pub fn source_len(&self, source: &str) -> usize {
        self.sources
            .iter()
            .find(|(tag, _)| tag == source)
            .map_or(0, |(_, list)| list.len())
    }
    pub fn sources(&self) -> impl Iterator<Item = &str> + '_ {
        self.sources.iter().map(|(tag, _)| tag.as_str())
    }

    /// Every hazard, source by source in first-ingest order.
    pub fn all_hazards(&self) -> impl Iterator<Item = &Hazard> + '_ {
        self.sources.iter().flat_map(|(_, list)| list.iter())
    }

    pub fn contains_point(&self, p: LatLng) -> bool {
        algorithms::containment::contains_any(p, self.all_hazards().map(|h| h.ring.as_slice()))
    }

    /// Highest-severity hazard; the earliest one wins a tie.
    pub fn peak_hazard(&self) -> Option<&Hazard> {
        self.all_hazards()
            .fold(None, |best: Option<&Hazard>, h| match best {
                Some(b) if h.level <= b.level => Some(b),
                _ => Some(h),
            })
    }

    /// Box around every hazard vertex.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.all_hazards().flat_map(|h| h.ring.iter().copied()))
    }

    // Routing

    pub fn is_in_verified_zone(&self, p: LatLng) -> bool {
        algorithms::gate::is_in_verified_zone(self, p)
    }

    pub fn score_path(&self, path: &[LatLng]) -> usize {
        algorithms::sampling::score(path, self, self.scoring.sample_budget)
    }

    pub fn rank_routes<M>(&self, candidates: Vec<RouteCandidate<M>>) -> Vec<ScoredRoute<M>> {
        algorithms::selection::rank(candidates, self, self.scoring.sample_budget)
    }

    pub fn select_best<M>(&self, candidates: Vec<RouteCandidate<M>>) -> Result<ScoredRoute<M>> {
        algorithms::selection::select_best(candidates, self, self.scoring.sample_budget)
    }
}

fn validate(source: &str, rec: HazardRecord) -> std::result::Result<Hazard, &'static str> {
    let ring = rec.ring.ok_or("outer ring missing or unparseable")?;
    if ring.is_empty() {
        return Err("empty ring");
    }
    if ring.len() > MAX_RING_POINTS {
        return Err("ring exceeds point limit");
    }
    let ring: Vec<LatLng> = ring.into_iter().map(LatLng::from_lng_lat).collect();
    if !ring.iter().all(LatLng::is_finite) {
        return Err("non-finite coordinate");
    }
    Ok(Hazard {
        ring,
        level: Level::parse(rec.level.as_deref()),
        source: source.to_string(),
        district_id: rec.district_id,
        reasons: rec.reasons,
    })
}
