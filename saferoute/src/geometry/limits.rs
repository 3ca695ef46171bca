// Ingestion caps applied to untrusted feed and provider documents

// Hazard feeds
pub const MAX_HAZARDS_PER_DOCUMENT: usize = 50_000;
pub const MAX_RING_POINTS: usize = 100_000;

// Routes
pub const MAX_PATH_POINTS: usize = 1_000_000;
pub const MAX_POLYLINE_CHARS: usize = 8 * 1024 * 1024;
pub const MAX_CANDIDATES: usize = 64;

