//! Encoded polyline codec (precision 5), the geometry format routing providers
//! return for overview and per-step paths.

use super::limits::MAX_POLYLINE_CHARS;
use crate::error::{Error, Result};
use crate::model::LatLng;

const SCALE: f64 = 1e5;

pub fn decode(encoded: &str) -> Result<Vec<LatLng>> {
    if encoded.len() > MAX_POLYLINE_CHARS {
        return Err(Error::LimitExceeded {
            what: "polyline characters",
            limit: MAX_POLYLINE_CHARS,
            got: encoded.len(),
        });
    }
    let bytes = encoded.as_bytes();
    let mut pos = 0usize;
    let (mut lat, mut lng) = (0i64, 0i64);
    let mut out = Vec::with_capacity(bytes.len() / 4);
    while pos < bytes.len() {
        let at = pos;
        lat = accumulate(lat, next_value(bytes, &mut pos)?, at)?;
        lng = accumulate(lng, next_value(bytes, &mut pos)?, at)?;
        out.push(LatLng::new(lat as f64 / SCALE, lng as f64 / SCALE));
    }
    Ok(out)
}

fn accumulate(total: i64, delta: i64, at: usize) -> Result<i64> {
    total
        .checked_add(delta)
        .ok_or_else(|| Error::InvalidInput(format!("polyline value overflow at byte {}", at)))
}

fn next_value(bytes: &[u8], pos: &mut usize) -> Result<i64> {
    let mut result = 0i64;
    let mut shift = 0u32;
    loop {
        let b = *bytes
            .get(*pos)
            .ok_or_else(|| Error::InvalidInput(format!("polyline truncated at byte {}", *pos)))?;
        if !(63..=126).contains(&b) {
            return Err(Error::InvalidInput(format!("polyline byte {} out of alphabet", *pos)));
        }
        if shift > 55 {
            return Err(Error::InvalidInput(format!("polyline value overlong at byte {}", *pos)));
        }
        let chunk = (b - 63) as i64;
        *pos += 1;
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk < 0x20 {
            break;
        }
    }
    Ok(if result & 1 != 0 { !(result >> 1) } else { result >> 1 })
}

/// Points must be finite; other values encode as saturated garbage.
pub fn encode(points: &[LatLng]) -> String {
    let mut out = String::with_capacity(points.len() * 8);
    let (mut prev_lat, mut prev_lng) = (0i64, 0i64);
    for p in points {
        let lat = (p.lat * SCALE).round() as i64;
        let lng = (p.lng * SCALE).round() as i64;
        push_value(lat.wrapping_sub(prev_lat), &mut out);
        push_value(lng.wrapping_sub(prev_lng), &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }
    out
}

fn push_value(v: i64, out: &mut String) {
    // zigzag into an unsigned value so the chunk loop always terminates in range
    let mut v = ((v << 1) ^ (v >> 63)) as u64;
    while v >= 0x20 {
        out.push((((v & 0x1f) | 0x20) as u8 + 63) as char);
        v >>= 5;
    }
    out.push((v as u8 + 63) as char);
}
