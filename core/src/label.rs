//! Grid cell labels — severity tier over the dominant SSID.

use crate::sanitizer::Sample;

// Severity tier cut points on the 0–100 risk score.
const HIGH_RISK_FLOOR: u32 = 60;
const MEDIUM_RISK_FLOOR: u32 = 30;

pub fn severity_tier(risk_score: u32) -> &'static str {
    if risk_score > HIGH_RISK_FLOOR {
        "HIGH"
    } else if risk_score > MEDIUM_RISK_FLOOR {
        "MEDIUM"
    } else {
        "LOW"
    }
}

/// The SSID of the strongest sample in the batch. Ties keep the earliest
/// sample in capture order.
pub fn dominant_ssid(batch: &[Sample]) -> &str {
    assert!(!batch.is_empty(), "dominant_ssid() called on empty batch");
    let mut best = &batch[0];
    for sample in &batch[1..] {
        if sample.rssi > best.rssi {
            best = sample;
        }
    }
    &best.ssid
}

/// Two-line cell label: severity tier, then the dominant SSID cut to
/// `width` characters with an ellipsis marker when longer.
pub fn build_label(batch: &[Sample], risk_score: u32, width: usize) -> String {
    let ssid = dominant_ssid(batch);
    let short = if ssid.chars().count() > width {
        let mut cut: String = ssid.chars().take(width).collect();
        cut.push('…');
        cut
    } else {
        ssid.to_string()
    };
    format!("{}\n{}", severity_tier(risk_score), short)
}
