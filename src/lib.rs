use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;
mod logging;

pub use api::{init_logging, level_style, set_panic_hook};

/// Session hazard state for one page: the dashboard, safe-route panel and SOS
/// gate each hold one and feed it before routing or gating.
#[wasm_bindgen]
pub struct HazardMap { pub(crate) inner: saferoute::HazardStore }

impl HazardMap {
    pub fn rs_new() -> HazardMap { HazardMap { inner: saferoute::HazardStore::new() } }
    pub fn rs_version(&self) -> u64 { self.inner.version() }
}
