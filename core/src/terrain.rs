//! Terrain grid builder — canonical location ordering and square layout.
//!
//! RULE: the canonical order defined here is THE iteration order for grid
//! placement and for every output that lists locations. Nothing else may
//! invent its own ordering.

use crate::{risk::RiskMetrics, spike::SpikeResult, threat::ThreatKind, types::PositionId};
use std::cmp::Ordering;
use std::collections::BTreeSet;

// ── Data structures ──────────────────────────────────────────────────────────

/// Everything the engine derives for one location. One per distinct
/// position with at least one valid sample.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub position: PositionId,
    pub risk_score: u32,
    pub threats: BTreeSet<ThreatKind>,
    pub dominant_ssid: String,
    pub metrics: RiskMetrics,
    pub spike: SpikeResult,
    /// Two-line severity/SSID label for the matching grid cell.
    pub label: String,
}

/// Square risk/label matrix for heat-map style rendering. Cells past the
/// populated count are padding: risk 0 and an empty label.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainGrid {
    pub size: usize,
    pub risk: Vec<Vec<u32>>,
    pub labels: Vec<Vec<String>>,
    populated: usize,
}

impl TerrainGrid {
    /// Row-major build over records already in canonical order.
    pub fn build(records: &[LocationRecord]) -> Self {
        let size = grid_size(records.len());
        let mut risk = vec![vec![0u32; size]; size];
        let mut labels = vec![vec![String::new(); size]; size];

        for (idx, record) in records.iter().enumerate() {
            let row = idx / size;
            let col = idx % size;
            risk[row][col] = record.risk_score;
            labels[row][col] = record.label.clone();
        }

        Self {
            size,
            risk,
            labels,
            populated: records.len(),
        }
    }

    /// Number of occupied cells, row-major from the top-left.
    pub fn populated(&self) -> usize {
        self.populated
    }

    /// Whether a cell holds a real location rather than grid padding.
    /// A zero-risk location and an empty cell both render as risk 0;
    /// renderers distinguish them through this.
    pub fn is_populated(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && row * self.size + col < self.populated
    }
}

/// Side length of the square grid: ceil(sqrt(location count)).
pub fn grid_size(location_count: usize) -> usize {
    (location_count as f64).sqrt().ceil() as usize
}

// ── Canonical ordering ───────────────────────────────────────────────────────

/// Sort position ids into canonical order.
///
/// Ids whose remainder after a one-character prefix is all ASCII digits
/// sort first, by that number ascending ("P2" before "P10"); all other
/// ids follow, lexicographically ("Room7", "lobby"). The two groups never
/// interleave, so mixed surveys still get a total, stable order.
pub fn canonical_order(positions: &mut [PositionId]) {
    positions.sort_by(|a, b| compare_positions(a, b));
}

fn compare_positions(a: &str, b: &str) -> Ordering {
    position_key(a).cmp(&position_key(b))
}

fn position_key(id: &str) -> (u8, i64, &str) {
    let suffix = id.get(1..).unwrap_or("");
    if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = suffix.parse::<i64>() {
            return (0, n, id);
        }
    }
    (1, 0, id)
}
