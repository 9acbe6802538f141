//! Metadata exporter — the locked contract with reporting collaborators.
//!
//! RULE: field names and nesting are stable. Dashboard and PDF rendering
//! depend on every field being present even when empty or zero.

use crate::{
    error::{EngineError, EngineResult},
    risk::RiskMetrics,
    spike::SpikeResult,
    terrain::LocationRecord,
    threat::ThreatKind,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One exported cell, serialized exactly as downstream consumers expect.
/// Threats carry their taxonomy renames ("Channel Overlap", "Evil Twin")
/// straight from the enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellMetadata {
    pub position: String,
    pub risk: u32,
    pub ssid: String,
    pub threats: Vec<ThreatKind>,
    pub metrics: RiskMetrics,
    pub signal_spike: SpikeResult,
}

impl From<&LocationRecord> for CellMetadata {
    fn from(record: &LocationRecord) -> Self {
        Self {
            position: record.position.clone(),
            risk: record.risk_score,
            ssid: record.dominant_ssid.clone(),
            threats: record.threats.iter().copied().collect(),
            metrics: record.metrics.clone(),
            signal_spike: record.spike.clone(),
        }
    }
}

/// Serialize records (already in canonical order) to the export JSON.
/// An empty record set serializes to an empty array, not an error.
pub fn to_json(records: &[LocationRecord]) -> EngineResult<String> {
    let cells: Vec<CellMetadata> = records.iter().map(CellMetadata::from).collect();
    Ok(serde_json::to_string_pretty(&cells)?)
}

/// Write the export file. The record set is serialized in full and staged
/// to a sibling temp file before renaming over the destination, so neither
/// a failed run nor a failed write leaves a truncated export behind.
pub fn write_metadata(records: &[LocationRecord], path: &Path) -> EngineResult<()> {
    let json = to_json(records)?;
    // staged next to the destination so the rename stays on one filesystem
    let staged = path.with_extension("tmp");
    fs::write(&staged, json).map_err(|source| EngineError::ExportIo {
        path: staged.clone(),
        source,
    })?;
    fs::rename(&staged, path).map_err(|source| EngineError::ExportIo {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("exported {} location records to {}", records.len(), path.display());
    Ok(())
}
