//! Risk scorer — per-location additive risk over a fixed taxonomy.
//!
//! Four order-independent aggregates over one location's samples, each
//! mapped through fixed thresholds to additive risk, capped at 100.
//! The algorithm is locked; the thresholds below are not configuration.

use crate::{sanitizer::Sample, threat::ThreatKind, types::{Channel, Rssi}};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

// ── Constants ────────────────────────────────────────────────────────────────

const LEAKAGE_RSSI_DBM: f64 = -60.0; // stronger than this bleeds past the site boundary
const ELEVATED_RSSI_DBM: f64 = -75.0;
const CONGESTION_SSID_COUNT: usize = 8; // distinct networks visible at one point
const BUSY_SSID_COUNT: usize = 4;
const OVERLAP_REUSE_COUNT: usize = 3; // samples sharing one channel
const EVIL_TWIN_REPEAT_COUNT: usize = 2; // same SSID observed more than once
const MAX_RISK: u32 = 100;

// ── Data structures ──────────────────────────────────────────────────────────

/// The aggregates behind one location's score. Part of the export schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub max_rssi: Rssi,
    pub ssid_count: usize,
    pub channel_overlap: usize,
    pub ssid_repeats: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskResult {
    /// Bounded 0–100.
    pub risk_score: u32,
    /// Deduplicated, sorted by display name. Empty is valid.
    pub threats: BTreeSet<ThreatKind>,
    pub metrics: RiskMetrics,
}

// ── Scorer ───────────────────────────────────────────────────────────────────

/// Score one location batch. Deterministic and order-independent: every
/// aggregate is a max or a count, so permuting the batch changes nothing.
///
/// Panics if the batch is empty — a location with zero valid samples is
/// excluded during grouping and must never reach the scorer.
pub fn compute_risk(batch: &[Sample]) -> RiskResult {
    assert!(!batch.is_empty(), "compute_risk() called on empty batch");

    let max_rssi = batch
        .iter()
        .map(|s| s.rssi)
        .fold(f64::NEG_INFINITY, f64::max);

    let ssid_count = batch
        .iter()
        .map(|s| s.ssid.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    // Channel-less samples are excluded here by construction.
    let mut channel_counts: HashMap<Channel, usize> = HashMap::new();
    for sample in batch {
        if let Some(ch) = sample.channel {
            *channel_counts.entry(ch).or_insert(0) += 1;
        }
    }
    let channel_overlap = channel_counts.values().copied().max().unwrap_or(0);

    let mut ssid_counts: HashMap<&str, usize> = HashMap::new();
    for sample in batch {
        *ssid_counts.entry(sample.ssid.as_str()).or_insert(0) += 1;
    }
    let ssid_repeats = ssid_counts.values().copied().max().unwrap_or(0);

    let mut risk = 0u32;
    let mut threats = BTreeSet::new();

    if max_rssi > LEAKAGE_RSSI_DBM {
        risk += 30;
        threats.insert(ThreatKind::Leakage);
    } else if max_rssi > ELEVATED_RSSI_DBM {
        risk += 15;
    }

    if ssid_count >= CONGESTION_SSID_COUNT {
        risk += 20;
        threats.insert(ThreatKind::Congestion);
    } else if ssid_count >= BUSY_SSID_COUNT {
        risk += 10;
    }

    if channel_overlap >= OVERLAP_REUSE_COUNT {
        risk += 20;
        threats.insert(ThreatKind::ChannelOverlap);
    } else if channel_overlap == 2 {
        risk += 10;
    }

    if ssid_repeats >= EVIL_TWIN_REPEAT_COUNT {
        risk += 30;
        threats.insert(ThreatKind::EvilTwin);
    }

    RiskResult {
        risk_score: risk.min(MAX_RISK),
        threats,
        metrics: RiskMetrics {
            max_rssi,
            ssid_count,
            channel_overlap,
            ssid_repeats,
        },
    }
}
