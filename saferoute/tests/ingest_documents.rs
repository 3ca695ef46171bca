use saferoute::geometry::limits::MAX_HAZARDS_PER_DOCUMENT;
use saferoute::json::{parse_fri_records, parse_geojson_records};
use saferoute::{Error, HazardStore, LatLng, Level, SOURCE_FRI, SOURCE_GEOJSON};
use serde_json::json;

fn fri_doc() -> serde_json::Value {
    json!([
        {
            "districtId": "KELANTAN:KOTA_BHARU:Mukim Pengkalan Chepa",
            "level": "RED",
            "reasons": ["river above danger level", "heavy rain"],
            "polygon": [[[102.27, 6.15], [102.30, 6.15], [102.30, 6.18], [102.27, 6.18]]]
        },
        { "districtId": "BROKEN:NO_POLYGON", "level": "ORANGE" },
        { "level": "YELLOW", "polygon": [] },
        { "level": "YELLOW", "polygon": [[]] },
        { "polygon": [[[102.20, 6.10], [102.22, 6.10], [102.22, 6.12]]] }
    ])
}

#[test]
fn fri_feed_skips_bad_items_and_keeps_good_ones() {
    let mut store = HazardStore::new();
    let report = store.ingest_fri_value(&fri_doc()).unwrap();
    assert_eq!(report.accepted, 2);
    assert_eq!(report.skipped, 3);

    let hazards: Vec<_> = store.all_hazards().collect();
    assert_eq!(hazards[0].level, Level::Red);
    assert_eq!(hazards[0].source, SOURCE_FRI);
    assert_eq!(hazards[0].reasons.len(), 2);
    assert_eq!(hazards[0].display_name(), "Mukim Pengkalan Chepa");
    assert_eq!(hazards[0].ring[0], LatLng::new(6.15, 102.27));
    assert_eq!(hazards[1].level, Level::Green, "missing level defaults to GREEN");
    assert_eq!(hazards[1].display_name(), "Unknown area");
}

#[test]
fn fri_document_must_be_array() {
    let r = parse_fri_records(&json!({"polygon": []}));
    assert!(matches!(r, Err(Error::InvalidInput(_))));
}

#[test]
fn geojson_keeps_polygons_only() {
    let doc = json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "level": "FLOOD" },
                "geometry": { "type": "Polygon", "coordinates": [[[102.24, 6.12], [102.25, 6.12], [102.25, 6.13], [102.24, 6.12]]] }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "LineString", "coordinates": [[102.0, 6.0], [102.1, 6.1]] }
            },
            { "type": "Feature", "geometry": null },
            {
                "type": "Feature",
                "properties": { "level": "orange" },
                "geometry": { "type": "Polygon", "coordinates": [[[102.0, 6.0], [102.1, 6.0], [102.1, 6.1]]] }
            }
        ]
    });
    let records = parse_geojson_records(&doc).unwrap();
    assert_eq!(records.len(), 2);
    let mut store = HazardStore::new();
    let report = store.ingest(SOURCE_GEOJSON, records);
    assert_eq!(report.accepted, 2);
    let levels: Vec<Level> = store.all_hazards().map(|h| h.level).collect();
    assert_eq!(levels, vec![Level::Green, Level::Orange]);
}

#[test]
fn geojson_without_features_is_empty() {
    let mut store = HazardStore::new();
    let report = store.ingest_geojson_value(&json!({"type": "FeatureCollection"})).unwrap();
    assert_eq!(report.accepted, 0);
    assert!(store.is_empty());
    assert!(parse_geojson_records(&json!([1, 2])).is_err());
}

#[test]
fn both_feeds_accumulate() {
    let mut store = HazardStore::new();
    store.reset();
    store.ingest_fri_value(&fri_doc()).unwrap();
    store
        .ingest_geojson_value(&json!({"features": [{
            "properties": {},
            "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]]] }
        }]}))
        .unwrap();
    assert_eq!(store.source_len(SOURCE_FRI), 2);
    assert_eq!(store.source_len(SOURCE_GEOJSON), 1);
    assert_eq!(store.len(), 3);
}

#[test]
fn oversized_document_is_rejected_whole() {
    let items: Vec<_> = (0..MAX_HAZARDS_PER_DOCUMENT + 1).map(|_| json!({})).collect();
    let mut store = HazardStore::new();
    let r = store.ingest_fri_value(&serde_json::Value::Array(items));
    match r {
        Err(Error::LimitExceeded { got, limit, .. }) => assert!(got > limit),
        other => panic!("expected LimitExceeded, got {:?}", other),
    }
    assert!(store.is_empty());
}
