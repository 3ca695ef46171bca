use saferoute_wasm::{level_style, HazardMap};
use js_sys::Reflect;
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// Plain objects, not Maps, like the page passes in
fn js(v: serde_json::Value) -> JsValue {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible()).unwrap()
}

fn get(v: &JsValue, k: &str) -> JsValue {
    Reflect::get(v, &JsValue::from_str(k)).unwrap()
}

fn value(v: &JsValue) -> JsValue {
    assert_eq!(get(v, "ok").as_bool(), Some(true), "expected ok envelope");
    get(v, "value")
}

fn town_fri() -> JsValue {
    js(json!([{
        "districtId": "KELANTAN:KOTA_BHARU:Bandar_Kota_Bharu",
        "level": "RED",
        "reasons": ["river overflow"],
        "polygon": [[[102.23, 6.12], [102.25, 6.12], [102.25, 6.135], [102.23, 6.135]]]
    }, { "level": "RED" }]))
}

#[wasm_bindgen_test]
fn ingest_and_gate() {
    let mut m = HazardMap::new();
    assert!(m.is_in_verified_zone(102.24, 6.128), "open without data");
    assert!(m.is_in_verified_zone(0.0, 0.0));

    let r = value(&m.ingest_fri_res(town_fri()));
    assert_eq!(get(&r, "accepted").as_f64(), Some(1.0));
    assert_eq!(get(&r, "skipped").as_f64(), Some(1.0));
    assert_eq!(m.hazard_count(), 1);
    assert_eq!(m.source_count("FRI"), 1);

    assert!(m.is_in_verified_zone(102.24, 6.128));
    assert!(!m.is_in_verified_zone(102.0, 6.0));
    assert_eq!(value(&m.is_in_verified_zone_res(102.0, 6.0)).as_bool(), Some(false));

    m.reset();
    assert_eq!(m.hazard_count(), 0);
    assert!(m.is_in_verified_zone(102.0, 6.0));
}

#[wasm_bindgen_test]
fn geojson_appends_to_fri() {
    let mut m = HazardMap::new();
    value(&m.ingest_fri_res(town_fri()));
    let gj = js(json!({"type": "FeatureCollection", "features": [{
        "type": "Feature", "properties": {"level": "FLOOD"},
        "geometry": {"type": "Polygon", "coordinates": [[[102.0, 6.0], [102.01, 6.0], [102.01, 6.01]]]}
    }]}));
    value(&m.ingest_geojson_res(gj));
    assert_eq!(m.hazard_count(), 2);
    assert_eq!(m.source_count("GEOJSON"), 1);
    let list = js_sys::Array::from(&m.hazards_json());
    assert_eq!(list.length(), 2);
    assert_eq!(get(&list.get(0), "source").as_string().as_deref(), Some("FRI"));
    assert_eq!(get(&list.get(0), "name").as_string().as_deref(), Some("Bandar Kota Bharu"));
    assert_eq!(get(&list.get(1), "level").as_string().as_deref(), Some("GREEN"));
}

#[wasm_bindgen_test]
fn score_path_samples() {
    let mut m = HazardMap::new();
    value(&m.ingest_fri_res(town_fri()));
    let inside: Vec<f64> = (0..250).flat_map(|_| [102.24, 6.128]).collect();
    assert_eq!(m.score_path(&inside), 125);
    assert_eq!(value(&m.score_path_res(&inside)).as_f64(), Some(125.0));
    m.set_sample_budget(250);
    assert_eq!(m.score_path(&inside), 250);
    assert_eq!(m.score_path(&[]), 0);
}

#[wasm_bindgen_test]
fn select_best_prefers_clear_route_and_keeps_meta() {
    let mut m = HazardMap::new();
    value(&m.ingest_fri_res(town_fri()));
    let candidates = js(json!([
        { "path": [[102.235, 6.125], [102.245, 6.13]], "meta": { "name": "through town" } },
        { "path": [[102.20, 6.20], [102.30, 6.20]], "meta": { "name": "coastal" } }
    ]));
    let best = value(&m.select_best_res(candidates));
    assert_eq!(get(&best, "index").as_f64(), Some(1.0));
    assert_eq!(get(&best, "hits").as_f64(), Some(0.0));
    assert_eq!(get(&best, "clear").as_bool(), Some(true));
    assert_eq!(get(&get(&best, "meta"), "name").as_string().as_deref(), Some("coastal"));
    let bounds = get(&best, "bounds");
    assert_eq!(get(&bounds, "west").as_f64(), Some(102.20));
    assert_eq!(get(&bounds, "east").as_f64(), Some(102.30));
}

#[wasm_bindgen_test]
fn provider_routes_are_decoded() {
    let mut m = HazardMap::new();
    value(&m.ingest_fri_res(town_fri()));
    let response = js(json!({ "routes": [
        { "distanceMeters": 900, "duration": "120s",
          "polyline": { "geoJsonLinestring": { "coordinates": [[102.235, 6.125], [102.245, 6.13]] } } },
        { "distanceMeters": 1500, "duration": "200s",
          "polyline": { "geoJsonLinestring": { "coordinates": [[102.20, 6.20], [102.30, 6.20]] } } }
    ]}));
    let best = value(&m.select_best_routes_res(response));
    assert_eq!(get(&best, "index").as_f64(), Some(1.0));
    assert_eq!(get(&get(&best, "meta"), "distance_m").as_f64(), Some(1500.0));
    assert_eq!(get(&get(&best, "meta"), "duration_s").as_f64(), Some(200.0));
}

#[wasm_bindgen_test]
fn rank_lists_all_candidates() {
    let mut m = HazardMap::new();
    value(&m.ingest_fri_res(town_fri()));
    let candidates = js(json!([
        { "path": [[102.24, 6.128], [102.24, 6.128]] },
        { "path": [[102.0, 6.0]] },
        { "path": [[102.24, 6.128], [102.0, 6.0]] }
    ]));
    let ranked = js_sys::Array::from(&value(&m.rank_routes_res(candidates)));
    let order: Vec<f64> = ranked.iter().map(|s| get(&s, "index").as_f64().unwrap()).collect();
    assert_eq!(order, vec![1.0, 2.0, 0.0]);
}

#[wasm_bindgen_test]
fn peak_hazard_and_styles() {
    let mut m = HazardMap::new();
    assert!(m.peak_hazard().is_null());
    assert!(m.hazard_bounds().is_null());
    value(&m.ingest_fri_res(town_fri()));
    let peak = m.peak_hazard();
    assert_eq!(get(&peak, "level").as_string().as_deref(), Some("RED"));
    assert!(get(&peak, "advice").as_string().unwrap().starts_with("Severe risk"));
    assert_eq!(get(&m.hazard_bounds(), "north").as_f64(), Some(6.135));

    let s = level_style("orange");
    assert_eq!(get(&s, "level").as_string().as_deref(), Some("ORANGE"));
    assert_eq!(get(&s, "fill").as_string().as_deref(), Some("#f57c00"));
    assert_eq!(get(&level_style("FLOOD"), "rank").as_f64(), Some(0.0));
}
