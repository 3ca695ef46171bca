use js_sys::{Array, Object, Reflect};
use saferoute::{Bounds, LatLng};
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

/// `[[lng, lat], ...]`, the ordering the map front-end uses for geometry.
pub fn lng_lat_array(points: &[LatLng]) -> Array {
    points.iter().map(|p| { let a = Array::new(); a.push(&p.lng.into()); a.push(&p.lat.into()); JsValue::from(a) }).collect()
}

pub fn bounds_obj(b: Option<Bounds>) -> JsValue {
    match b {
        Some(b) => {
            let o = new_obj();
            set_kv(&o, "south", &b.south.into());
            set_kv(&o, "west", &b.west.into());
            set_kv(&o, "north", &b.north.into());
            set_kv(&o, "east", &b.east.into());
            o.into()
        }
        None => JsValue::NULL,
    }
}

/// Interleaved `[lng0, lat0, lng1, lat1, ...]` into points; a trailing odd value is ignored.
pub fn path_from_interleaved(coords: &[f64]) -> Vec<LatLng> {
    coords.chunks_exact(2).map(|c| LatLng::new(c[1], c[0])).collect()
}
