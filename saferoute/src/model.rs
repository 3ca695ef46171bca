use serde::{Deserialize, Serialize};

pub const SOURCE_FRI: &str = "FRI";
pub const SOURCE_GEOJSON: &str = "GEOJSON";

/// A latitude/longitude pair in degrees. Treated as plane coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }

    /// Build from a GeoJSON-ordered `[lng, lat]` position.
    #[inline]
    pub fn from_lng_lat(p: [f64; 2]) -> Self {
        LatLng { lat: p[1], lng: p[0] }
    }

    #[inline]
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Four-tier flood risk level, ordered by severity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    #[default]
    Green = 0,
    Yellow = 1,
    Orange = 2,
    Red = 3,
}

impl Level {
    /// Parse a feed level string. Unknown or missing levels map to `Green`.
    pub fn parse(s: Option<&str>) -> Level {
        match s.map(str::trim) {
            Some(l) if l.eq_ignore_ascii_case("RED") => Level::Red,
            Some(l) if l.eq_ignore_ascii_case("ORANGE") => Level::Orange,
            Some(l) if l.eq_ignore_ascii_case("YELLOW") => Level::Yellow,
            _ => Level::Green,
        }
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Green => "GREEN",
            Level::Yellow => "YELLOW",
            Level::Orange => "ORANGE",
            Level::Red => "RED",
        }
    }

    /// Citizen-facing advisory line for this level.
    pub fn advice(self) -> &'static str {
        match self {
            Level::Red => "Severe risk. Evacuate if instructed. Avoid rivers/underpasses.",
            Level::Orange => "High risk in 24h. Move valuables. Plan evacuation.",
            Level::Yellow => "Heavy rain possible. Prepare go-bag. Avoid low areas.",
            Level::Green => "Low risk. Stay alert for updates.",
        }
    }

    pub fn fill_color(self) -> &'static str {
        match self {
            Level::Red => "#d32f2f",
            Level::Orange => "#f57c00",
            Level::Yellow => "#fbc02d",
            Level::Green => "#43a047",
        }
    }

    pub fn stroke_color(self) -> &'static str {
        match self {
            Level::Red => "#b71c1c",
            Level::Orange => "#e65100",
            Level::Yellow => "#f9a825",
            Level::Green => "#2e7d32",
        }
    }
}

/// A validated hazard polygon.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Hazard {
    pub ring: Vec<LatLng>,
    pub level: Level,
    pub source: String,
    pub district_id: Option<String>,
    pub reasons: Vec<String>,
}

impl Hazard {
    /// Readable area name: last `:` segment of the district id, underscores as spaces.
    pub fn display_name(&self) -> String {
        match self.district_id.as_deref() {
            Some(id) if !id.is_empty() => {
                let last = id.rsplit(':').next().unwrap_or(id);
                last.replace('_', " ")
            }
            _ => "Unknown area".to_string(),
        }
    }
}

/// Raw ingestion input, not yet validated. Positions are `[lng, lat]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HazardRecord {
    /// `None` when the outer ring could not be parsed at all.
    pub ring: Option<Vec<[f64; 2]>>,
    pub level: Option<String>,
    pub district_id: Option<String>,
    pub reasons: Vec<String>,
}

impl HazardRecord {
    pub fn from_ring(ring: Vec<[f64; 2]>, level: Option<&str>) -> Self {
        HazardRecord {
            ring: Some(ring),
            level: level.map(str::to_string),
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub accepted: usize,
    pub skipped: usize,
}

/// Opaque metadata the provider adapters carry alongside a path.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMeta {
    pub distance_m: Option<f64>,
    pub duration_s: Option<f64>,
    pub summary: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteCandidate<M> {
    pub path: Vec<LatLng>,
    pub meta: M,
}

impl<M> RouteCandidate<M> {
    pub fn new(path: Vec<LatLng>, meta: M) -> Self {
        RouteCandidate { path, meta }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScoredRoute<M> {
    /// Position of the candidate in the caller's input.
    pub index: usize,
    pub candidate: RouteCandidate<M>,
    pub hits: usize,
    pub samples: Vec<LatLng>,
}

impl<M> ScoredRoute<M> {
    #[inline]
    pub fn is_clear(&self) -> bool {
        self.hits == 0
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.samples.iter().copied())
    }
}

/// Axis-aligned lat/lng box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}
