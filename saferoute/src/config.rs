use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Sampled points per route before the stride grows past one.
pub const DEFAULT_SAMPLE_BUDGET: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub sample_budget: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig { sample_budget: DEFAULT_SAMPLE_BUDGET }
    }
}

impl ScoringConfig {
    /// Missing fields keep their defaults.
    pub fn from_json_value(v: Value) -> Result<Self> {
        Ok(serde_json::from_value(v)?)
    }
}
