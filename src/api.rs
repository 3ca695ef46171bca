use crate::HazardMap;
use crate::error;
use crate::interop::{bounds_obj, lng_lat_array, new_obj, path_from_interleaved, set_kv};
use saferoute::geometry::limits::{MAX_CANDIDATES, MAX_PATH_POINTS};
use saferoute::{Hazard, IngestReport, LatLng, Level, RouteCandidate, ScoredRoute, ScoringConfig};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Route core log events to the console at `level` ("warn", "debug", ...).
#[wasm_bindgen]
pub fn init_logging(level: &str) -> bool {
    crate::logging::init(level)
}

/// Display info for a feed level string.
#[wasm_bindgen]
pub fn level_style(level: &str) -> JsValue {
    let l = Level::parse(Some(level));
    let obj = new_obj();
    set_kv(&obj, "level", &JsValue::from_str(l.as_str()));
    set_kv(&obj, "rank", &JsValue::from_f64(l.rank() as f64));
    set_kv(&obj, "fill", &JsValue::from_str(l.fill_color()));
    set_kv(&obj, "stroke", &JsValue::from_str(l.stroke_color()));
    set_kv(&obj, "advice", &JsValue::from_str(l.advice()));
    obj.into()
}

#[derive(Deserialize)]
struct CandidateDe {
    path: Vec<[f64; 2]>,
    #[serde(default)]
    meta: serde_json::Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HazardSer<'a> {
    source: &'a str,
    level: Level,
    district_id: Option<&'a str>,
    name: String,
    reasons: &'a [String],
    ring: Vec<[f64; 2]>,
    fill: &'static str,
    stroke: &'static str,
}

impl<'a> From<&'a Hazard> for HazardSer<'a> {
    fn from(h: &'a Hazard) -> Self {
        HazardSer {
            source: &h.source,
            level: h.level,
            district_id: h.district_id.as_deref(),
            name: h.display_name(),
            reasons: &h.reasons,
            ring: h.ring.iter().map(|p| p.to_lng_lat()).collect(),
            fill: h.level.fill_color(),
            stroke: h.level.stroke_color(),
        }
    }
}

fn to_js<T: Serialize + ?Sized>(v: &T) -> Result<JsValue, JsValue> {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| error::err("serialize", e.to_string(), None))
}

fn from_js_json(v: JsValue) -> Result<serde_json::Value, JsValue> {
    serde_wasm_bindgen::from_value::<serde_json::Value>(v).map_err(|e| error::bad_json(e.to_string()))
}

fn report_obj(r: IngestReport) -> JsValue {
    let obj = new_obj();
    set_kv(&obj, "accepted", &JsValue::from_f64(r.accepted as f64));
    set_kv(&obj, "skipped", &JsValue::from_f64(r.skipped as f64));
    obj.into()
}

fn scored_obj<M: Serialize>(s: &ScoredRoute<M>) -> Result<JsValue, JsValue> {
    let obj = new_obj();
    set_kv(&obj, "index", &JsValue::from_f64(s.index as f64));
    set_kv(&obj, "hits", &JsValue::from_f64(s.hits as f64));
    set_kv(&obj, "clear", &JsValue::from_bool(s.is_clear()));
    set_kv(&obj, "samples", &lng_lat_array(&s.samples).into());
    set_kv(&obj, "bounds", &bounds_obj(s.bounds()));
    set_kv(&obj, "meta", &to_js(&s.candidate.meta)?);
    Ok(obj.into())
}

fn flat_candidates(v: JsValue) -> Result<Vec<RouteCandidate<serde_json::Value>>, JsValue> {
    let raw: Vec<CandidateDe> =
        serde_wasm_bindgen::from_value(v).map_err(|e| error::bad_json(e.to_string()))?;
    if raw.len() > MAX_CANDIDATES {
        return Err(error::from_core(&saferoute::Error::LimitExceeded {
            what: "route candidates",
            limit: MAX_CANDIDATES,
            got: raw.len(),
        }));
    }
    let mut out = Vec::with_capacity(raw.len());
    for c in raw {
        if c.path.len() > MAX_PATH_POINTS {
            return Err(error::from_core(&saferoute::Error::LimitExceeded {
                what: "path points",
                limit: MAX_PATH_POINTS,
                got: c.path.len(),
            }));
        }
        let path: Vec<LatLng> = c.path.into_iter().map(LatLng::from_lng_lat).collect();
        if !path.iter().all(LatLng::is_finite) {
            return Err(error::non_finite("path"));
        }
        out.push(RouteCandidate::new(path, c.meta));
    }
    Ok(out)
}

// An empty winning path means no geometry was available, not a safe route.
fn best_envelope<M: Serialize>(best: saferoute::Result<ScoredRoute<M>>) -> JsValue {
    match best {
        Ok(b) if b.candidate.path.is_empty() => error::no_polyline(b.index),
        Ok(b) => match scored_obj(&b) {
            Ok(v) => error::ok(v),
            Err(e) => e,
        },
        Err(e) => error::from_core(&e),
    }
}

#[wasm_bindgen]
impl HazardMap {
    #[wasm_bindgen(constructor)]
    pub fn new() -> HazardMap {
        crate::HazardMap::rs_new()
    }
    pub fn version(&self) -> u64 {
        self.rs_version()
    }

    // Config
    pub fn set_sample_budget(&mut self, budget: u32) {
        self.inner.set_sample_budget(budget as usize);
    }
    pub fn sample_budget(&self) -> u32 {
        self.inner.config().sample_budget as u32
    }
    pub fn configure_res(&mut self, cfg: JsValue) -> JsValue {
        let v = match from_js_json(cfg) {
            Ok(v) => v,
            Err(e) => return e,
        };
        match ScoringConfig::from_json_value(v) {
            Ok(c) => {
                self.inner.set_config(c);
                error::ok(JsValue::from_f64(c.sample_budget as f64))
            }
            Err(e) => error::from_core(&e),
        }
    }

    // Store
    pub fn reset(&mut self) {
        self.inner.reset();
    }
    pub fn hazard_count(&self) -> u32 {
        self.inner.len() as u32
    }
    pub fn source_count(&self, source: &str) -> u32 {
        self.inner.source_len(source) as u32
    }
    pub fn ingest_fri_res(&mut self, doc: JsValue) -> JsValue {
        let v = match from_js_json(doc) {
            Ok(v) => v,
            Err(e) => return e,
        };
        match self.inner.ingest_fri_value(&v) {
            Ok(r) => error::ok(report_obj(r)),
            Err(e) => error::from_core(&e),
        }
    }
    pub fn ingest_geojson_res(&mut self, doc: JsValue) -> JsValue {
        let v = match from_js_json(doc) {
            Ok(v) => v,
            Err(e) => return e,
        };
        match self.inner.ingest_geojson_value(&v) {
            Ok(r) => error::ok(report_obj(r)),
            Err(e) => error::from_core(&e),
        }
    }
    /// FRI-shaped records under a caller-chosen source tag.
    pub fn ingest_res(&mut self, source: &str, doc: JsValue) -> JsValue {
        let v = match from_js_json(doc) {
            Ok(v) => v,
            Err(e) => return e,
        };
        match saferoute::json::parse_fri_records(&v) {
            Ok(records) => error::ok(report_obj(self.inner.ingest(source, records))),
            Err(e) => error::from_core(&e),
        }
    }
    pub fn hazards_json(&self) -> JsValue {
        let list: Vec<HazardSer> = self.inner.all_hazards().map(HazardSer::from).collect();
        match to_js(&list) {
            Ok(v) => v,
            Err(e) => e,
        }
    }
    pub fn hazard_bounds(&self) -> JsValue {
        bounds_obj(self.inner.bounds())
    }
    pub fn peak_hazard(&self) -> JsValue {
        match self.inner.peak_hazard() {
            Some(h) => match to_js(&HazardSer::from(h)) {
                Ok(v) => {
                    if let Ok(obj) = v.clone().dyn_into::<js_sys::Object>() {
                        set_kv(&obj, "advice", &JsValue::from_str(h.level.advice()));
                    }
                    v
                }
                Err(e) => e,
            },
            None => JsValue::NULL,
        }
    }

    // Gate
    pub fn contains_point(&self, lng: f64, lat: f64) -> bool {
        self.inner.contains_point(LatLng::new(lat, lng))
    }
    pub fn is_in_verified_zone(&self, lng: f64, lat: f64) -> bool {
        saferoute::algorithms::gate::is_in_verified_zone_lng_lat(&self.inner, [lng, lat])
    }
    pub fn is_in_verified_zone_res(&self, lng: f64, lat: f64) -> JsValue {
        if !lng.is_finite() {
            return error::non_finite("lng");
        }
        if !lat.is_finite() {
            return error::non_finite("lat");
        }
        error::ok(JsValue::from_bool(self.is_in_verified_zone(lng, lat)))
    }

    // Scoring
    /// `coords` is interleaved `[lng, lat, lng, lat, ...]`.
    pub fn score_path(&self, coords: &[f64]) -> u32 {
        self.inner.score_path(&path_from_interleaved(coords)) as u32
    }
    pub fn score_path_res(&self, coords: &[f64]) -> JsValue {
        if coords.len() % 2 != 0 {
            return error::err("invalid_input", "coords must hold lng/lat pairs", None);
        }
        if coords.len() / 2 > MAX_PATH_POINTS {
            return error::out_of_range("coords", 0.0, (MAX_PATH_POINTS * 2) as f64, coords.len() as f64);
        }
        if !coords.iter().all(|c| c.is_finite()) {
            return error::non_finite("coords");
        }
        error::ok(JsValue::from_f64(self.score_path(coords) as f64))
    }

    // Selection
    /// `candidates`: `[{ path: [[lng, lat], ...], meta? }, ...]`.
    pub fn select_best_res(&self, candidates: JsValue) -> JsValue {
        match flat_candidates(candidates) {
            Ok(c) => best_envelope(self.inner.select_best(c)),
            Err(e) => e,
        }
    }
    /// Raw routing-provider routes (or a response with `routes`), decoded in the core.
    pub fn select_best_routes_res(&self, response: JsValue) -> JsValue {
        let v = match from_js_json(response) {
            Ok(v) => v,
            Err(e) => return e,
        };
        match saferoute::json::candidates_from_provider_routes(&v) {
            Ok(c) => best_envelope(self.inner.select_best(c)),
            Err(e) => error::from_core(&e),
        }
    }
    /// Every candidate, least risky first.
    pub fn rank_routes_res(&self, candidates: JsValue) -> JsValue {
        let c = match flat_candidates(candidates) {
            Ok(c) => c,
            Err(e) => return e,
        };
        let out = js_sys::Array::new();
        for s in self.inner.rank_routes(c) {
            match scored_obj(&s) {
                Ok(v) => {
                    out.push(&v);
                }
                Err(e) => return e,
            }
        }
        error::ok(out.into())
    }
}

impl Default for HazardMap {
    fn default() -> Self {
        Self::new()
    }
}
