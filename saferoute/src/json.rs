use crate::error::{Error, Result};
use crate::geometry::limits::{MAX_CANDIDATES, MAX_HAZARDS_PER_DOCUMENT, MAX_PATH_POINTS};
use crate::geometry::polyline;
use crate::model::{HazardRecord, LatLng, RouteCandidate, RouteMeta};
use serde_json::Value;

// Hazard feeds

/// FRI feed: `[{ districtId, level, reasons, polygon: [[[lng, lat], ...]] }, ...]`.
pub fn parse_fri_records(v: &Value) -> Result<Vec<HazardRecord>> {
    let items = v
        .as_array()
        .ok_or_else(|| Error::InvalidInput("FRI document must be an array".into()))?;
    check_document_len(items.len())?;
    Ok(items.iter().map(fri_record).collect())
}

fn fri_record(item: &Value) -> HazardRecord {
    HazardRecord {
        ring: item.get("polygon").and_then(outer_ring),
        level: str_field(item, "level"),
        district_id: str_field(item, "districtId"),
        reasons: string_list(item.get("reasons")),
    }
}

/// GeoJSON FeatureCollection. Features whose geometry is not a `Polygon` are ignored.
pub fn parse_geojson_records(v: &Value) -> Result<Vec<HazardRecord>> {
    let obj = v
        .as_object()
        .ok_or_else(|| Error::InvalidInput("GeoJSON document must be an object".into()))?;
    let features = obj
        .get("features")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    check_document_len(features.len())?;
    let mut out = Vec::with_capacity(features.len());
    let mut ignored = 0usize;
    for f in features {
        let geometry = f.get("geometry");
        let kind = geometry.and_then(|g| g.get("type")).and_then(Value::as_str);
        if kind != Some("Polygon") {
            ignored += 1;
            continue;
        }
        let props = f.get("properties");
        out.push(HazardRecord {
            ring: geometry.and_then(|g| g.get("coordinates")).and_then(outer_ring),
            level: props.and_then(|p| str_field(p, "level")),
            district_id: props.and_then(|p| str_field(p, "districtId")),
            reasons: string_list(props.and_then(|p| p.get("reasons"))),
        });
    }
    if ignored > 0 {
        tracing::debug!(ignored, "ignored non-polygon GeoJSON features");
    }
    Ok(out)
}

fn check_document_len(got: usize) -> Result<()> {
    if got > MAX_HAZARDS_PER_DOCUMENT {
        return Err(Error::LimitExceeded {
            what: "hazards per document",
            limit: MAX_HAZARDS_PER_DOCUMENT,
            got,
        });
    }
    Ok(())
}

/// First ring of a GeoJSON polygon coordinate array. Any bad position drops the ring.
fn outer_ring(polygon: &Value) -> Option<Vec<[f64; 2]>> {
    let ring = polygon.as_array()?.first()?.as_array()?;
    ring.iter().map(position).collect()
}

fn position(v: &Value) -> Option<[f64; 2]> {
    let a = v.as_array()?;
    Some([a.first()?.as_f64()?, a.get(1)?.as_f64()?])
}

fn str_field(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(Value::as_str).map(str::to_string)
}

fn string_list(v: Option<&Value>) -> Vec<String> {
    v.and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

// Provider routes

/// Accepts a bare array of routes or a provider response `{ routes: [...] }`.
pub fn candidates_from_provider_routes(v: &Value) -> Result<Vec<RouteCandidate<RouteMeta>>> {
    let routes = v
        .as_array()
        .or_else(|| v.get("routes").and_then(Value::as_array))
        .ok_or_else(|| Error::InvalidInput("expected an array of routes".into()))?;
    if routes.len() > MAX_CANDIDATES {
        return Err(Error::LimitExceeded {
            what: "route candidates",
            limit: MAX_CANDIDATES,
            got: routes.len(),
        });
    }
    Ok(routes.iter().map(candidate_from_provider_route).collect())
}

/// Flatten one provider route into a candidate. Geometry that cannot be decoded
/// yields an empty path; the caller decides what an empty winner means.
pub fn candidate_from_provider_route(route: &Value) -> RouteCandidate<RouteMeta> {
    let path = match provider_path(route) {
        Ok(path) if path.len() > MAX_PATH_POINTS => {
            tracing::warn!(points = path.len(), limit = MAX_PATH_POINTS, "route path over limit; dropped");
            Vec::new()
        }
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(error = %e, "route geometry could not be decoded");
            Vec::new()
        }
    };
    RouteCandidate::new(path, provider_meta(route))
}

fn provider_path(route: &Value) -> Result<Vec<LatLng>> {
    let line = route.get("polyline");
    if let Some(coords) = line
        .and_then(|p| p.get("geoJsonLinestring"))
        .and_then(|g| g.get("coordinates"))
        .and_then(Value::as_array)
        .filter(|c| !c.is_empty())
    {
        return coords
            .iter()
            .map(|c| position(c).map(LatLng::from_lng_lat))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| Error::InvalidInput("bad GeoJSON line position".into()));
    }
    if let Some(enc) = line.and_then(|p| p.get("encodedPolyline")).and_then(Value::as_str) {
        return polyline::decode(enc);
    }
    if let Some(enc) = route.get("overview_polyline").and_then(encoded_points) {
        return polyline::decode(enc);
    }
    let mut out = Vec::new();
    for leg in route.get("legs").and_then(Value::as_array).into_iter().flatten() {
        for step in leg.get("steps").and_then(Value::as_array).into_iter().flatten() {
            if let Some(enc) = step.get("polyline").and_then(encoded_points) {
                out.extend(polyline::decode(enc)?);
            }
        }
    }
    Ok(out)
}

// Directions responses carry either `{ points: "..." }` or the bare string.
fn encoded_points(v: &Value) -> Option<&str> {
    v.as_str().or_else(|| v.get("points").and_then(Value::as_str))
}

fn provider_meta(route: &Value) -> RouteMeta {
    let legs = route.get("legs").and_then(Value::as_array);
    let leg_sum = |key: &str| -> Option<f64> {
        let legs = legs?;
        let vals: Vec<f64> = legs
            .iter()
            .filter_map(|l| l.get(key).and_then(|d| d.get("value")).and_then(Value::as_f64))
            .collect();
        if vals.is_empty() { None } else { Some(vals.iter().sum()) }
    };
    RouteMeta {
        distance_m: route
            .get("distanceMeters")
            .and_then(Value::as_f64)
            .or_else(|| leg_sum("distance")),
        duration_s: route
            .get("duration")
            .and_then(duration_seconds)
            .or_else(|| leg_sum("duration")),
        summary: str_field(route, "summary"),
    }
}

// Routes API durations are strings like "754s".
fn duration_seconds(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('s').parse().ok(),
        _ => None,
    }
}
