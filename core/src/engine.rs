//! The batch engine — one synchronous pass over a capture feed.
//!
//! EXECUTION ORDER (fixed, never reordered):
//!   1. Sanitizer turns raw rows into samples.
//!   2. Samples are grouped by position, preserving capture order.
//!   3. Per position, in canonical order: risk scorer, spike detector,
//!      label builder.
//!   4. Terrain grid assembly.
//!
//! RULES:
//!   - The engine holds no state between passes; every call is a fresh run.
//!   - Components receive immutable views and return new values.
//!   - Per-row and per-location anomalies are absorbed; only a missing
//!     feed is fatal, and that is raised in feed::load_feed.

use crate::{
    config::EngineConfig,
    feed::RawRow,
    label, risk,
    sanitizer::{self, Sample},
    spike,
    terrain::{self, LocationRecord, TerrainGrid},
    types::{PositionId, Rssi},
};
use std::collections::HashMap;

// Executive-summary cut points, per audit-report convention. These are
// distinct from the label tiers in label.rs.
const SUMMARY_HIGH_FLOOR: u32 = 70;
const SUMMARY_MEDIUM_FLOOR: u32 = 40;

/// Survey-level roll-up for report headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub total_points: usize,
    /// Locations with risk >= 70.
    pub high_alerts: usize,
    /// Locations with 40 <= risk < 70.
    pub medium_alerts: usize,
}

/// The complete result of one engine pass.
#[derive(Debug, Clone)]
pub struct TerrainAnalysis {
    /// One record per surveyed location, in canonical order.
    pub records: Vec<LocationRecord>,
    pub grid: TerrainGrid,
    traces: HashMap<PositionId, Vec<Rssi>>,
}

impl TerrainAnalysis {
    /// Capture-order RSSI sequence for one location, for trend charts.
    pub fn trace(&self, position: &str) -> Option<&[Rssi]> {
        self.traces.get(position).map(Vec::as_slice)
    }

    pub fn summary(&self) -> AnalysisSummary {
        let high_alerts = self
            .records
            .iter()
            .filter(|r| r.risk_score >= SUMMARY_HIGH_FLOOR)
            .count();
        let medium_alerts = self
            .records
            .iter()
            .filter(|r| r.risk_score >= SUMMARY_MEDIUM_FLOOR && r.risk_score < SUMMARY_HIGH_FLOOR)
            .count();
        AnalysisSummary {
            total_points: self.records.len(),
            high_alerts,
            medium_alerts,
        }
    }
}

pub struct RiskEngine {
    config: EngineConfig,
}

impl RiskEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one full pass over raw feed rows. An empty or fully-rejected
    /// feed yields an empty analysis, not an error.
    pub fn analyze(&self, rows: &[RawRow]) -> TerrainAnalysis {
        let samples = sanitizer::sanitize(rows, &self.config);
        self.analyze_samples(samples)
    }

    /// Pass over already-sanitized samples. Grouping preserves capture
    /// order within each location. A location whose every sample was
    /// rejected never gets a batch here, which is what lets the scorer
    /// assert non-emptiness.
    pub fn analyze_samples(&self, samples: Vec<Sample>) -> TerrainAnalysis {
        let mut batches: HashMap<PositionId, Vec<Sample>> = HashMap::new();
        for sample in samples {
            batches.entry(sample.position.clone()).or_default().push(sample);
        }

        let mut positions: Vec<PositionId> = batches.keys().cloned().collect();
        terrain::canonical_order(&mut positions);

        let mut records = Vec::with_capacity(positions.len());
        let mut traces = HashMap::with_capacity(positions.len());

        for position in &positions {
            let batch = &batches[position];
            let risk = risk::compute_risk(batch);
            let rssi: Vec<Rssi> = batch.iter().map(|s| s.rssi).collect();
            let spike = spike::detect_spikes(&rssi, self.config.spike_threshold_db);
            let label = label::build_label(batch, risk.risk_score, self.config.label_ssid_width);
            let dominant_ssid = label::dominant_ssid(batch).to_string();

            if label::severity_tier(risk.risk_score) == "HIGH" {
                log::warn!(
                    "position {}: risk {} with threats {:?}",
                    position,
                    risk.risk_score,
                    risk.threats
                );
            }

            records.push(LocationRecord {
                position: position.clone(),
                risk_score: risk.risk_score,
                threats: risk.threats,
                dominant_ssid,
                metrics: risk.metrics,
                spike,
                label,
            });
            traces.insert(position.clone(), rssi);
        }

        let grid = TerrainGrid::build(&records);
        log::info!(
            "engine pass complete: {} locations, grid {}x{}",
            records.len(),
            grid.size,
            grid.size
        );

        TerrainAnalysis {
            records,
            grid,
            traces,
        }
    }
}
