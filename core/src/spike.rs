//! Signal spike detector.
//!
//! Sudden upward RSSI jumps between consecutive samples are short-term
//! events, kept separate from the cumulative risk score.

use crate::types::Rssi;
use serde::{Deserialize, Serialize};

/// Default jump size (dB) flagged as a spike event.
pub const DEFAULT_SPIKE_THRESHOLD_DB: f64 = 15.0;

/// Part of the export schema (`signal_spike`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpikeResult {
    pub detected: bool,
    /// Largest spike-event diff, 0 when none were detected.
    pub max_spike: f64,
}

impl SpikeResult {
    pub fn none() -> Self {
        Self {
            detected: false,
            max_spike: 0.0,
        }
    }
}

/// Scan one location's RSSI sequence in capture order. Unlike the risk
/// scorer this is order-sensitive: only adjacent pairs are compared, and
/// fewer than two samples can never spike.
pub fn detect_spikes(rssi: &[Rssi], threshold_db: f64) -> SpikeResult {
    let mut result = SpikeResult::none();
    for pair in rssi.windows(2) {
        let diff = pair[1] - pair[0];
        if diff >= threshold_db {
            result.detected = true;
            result.max_spike = result.max_spike.max(diff);
        }
    }
    result
}
