//! Engine configuration — the tunable half of the pipeline.
//!
//! The risk-scoring thresholds themselves are fixed constants in risk.rs;
//! only the knobs a survey operator may reasonably adjust live here.

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Consecutive-sample RSSI jump (dB) flagged as a spike event.
    #[serde(default = "default_spike_threshold_db")]
    pub spike_threshold_db: f64,

    /// Minimum cleaned SSID length; anything shorter is treated as missing.
    #[serde(default = "default_min_ssid_chars")]
    pub min_ssid_chars: usize,

    /// Dominant-SSID width in grid cell labels before ellipsis truncation.
    #[serde(default = "default_label_ssid_width")]
    pub label_ssid_width: usize,

    /// Identifiers rejected case-insensitively during sanitization.
    #[serde(default = "default_ssid_blocklist")]
    pub ssid_blocklist: Vec<String>,
}

fn default_spike_threshold_db() -> f64 {
    crate::spike::DEFAULT_SPIKE_THRESHOLD_DB
}

fn default_min_ssid_chars() -> usize {
    3
}

fn default_label_ssid_width() -> usize {
    10
}

fn default_ssid_blocklist() -> Vec<String> {
    ["hidden", "<hidden>", "unknown"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            spike_threshold_db: default_spike_threshold_db(),
            min_ssid_chars: default_min_ssid_chars(),
            label_ssid_width: default_label_ssid_width(),
            ssid_blocklist: default_ssid_blocklist(),
        }
    }
}

impl EngineConfig {
    /// Load a config file. Absent fields fall back to their defaults.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| EngineError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| EngineError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
