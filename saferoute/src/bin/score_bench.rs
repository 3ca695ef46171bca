use saferoute::{HazardRecord, HazardStore, LatLng, RouteCandidate};
use std::time::Instant;

fn build_store(hazards: usize) -> HazardStore {
    let mut store = HazardStore::new();
    // Grid of small square cells around Kota Bharu; ring size ~ 24 vertices
    let side = (hazards as f64).sqrt().ceil() as usize;
    let mut records = Vec::with_capacity(hazards);
    'outer: for j in 0..side { for i in 0..side {
        if records.len() >= hazards { break 'outer; }
        let lng0 = 102.0 + i as f64 * 0.02; let lat0 = 6.0 + j as f64 * 0.02;
        let mut ring = Vec::with_capacity(24);
        for k in 0..24 { let a = k as f64 / 24.0 * std::f64::consts::TAU; ring.push([lng0 + 0.005 * a.cos(), lat0 + 0.005 * a.sin()]); }
        records.push(HazardRecord::from_ring(ring, Some("ORANGE")));
    }}
    store.ingest("BENCH", records);
    store
}

fn build_path(points: usize, offset: f64) -> Vec<LatLng> {
    (0..points).map(|k| { let t = k as f64 / points.max(1) as f64; LatLng::new(6.0 + t * 0.5 + offset, 102.0 + t * 0.5) }).collect()
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut points = 20_000usize;
    let mut hazards = 400usize;
    let mut runs = 200usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--points=") { if let Ok(v)=val.parse() { points=v; } }
        else if let Some(val)=a.strip_prefix("--hazards=") { if let Ok(v)=val.parse() { hazards=v; } }
        else if let Some(val)=a.strip_prefix("--runs=") { if let Ok(v)=val.parse() { runs=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }

    let store = build_store(hazards);
    let mut times_ms: Vec<f64> = Vec::with_capacity(runs);
    let start_all = Instant::now();
    let mut best_hits = 0usize;
    for r in 0..runs {
        let offset = (r % 7) as f64 * 0.003;
        let candidates = vec![
            RouteCandidate::new(build_path(points, offset), ()),
            RouteCandidate::new(build_path(points / 2, -offset), ()),
            RouteCandidate::new(build_path(points * 2, offset * 0.5), ()),
        ];
        let t0 = Instant::now();
        match store.select_best(candidates) { Ok(best) => best_hits += best.hits, Err(e) => { eprintln!("select failed: {}", e); std::process::exit(1); } }
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    println!("points={} hazards={} runs={} best_hits={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}", points, store.len(), runs, best_hits, dur_all, med, p90, p99);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
