//! Capture feed ingestion.
//!
//! The collector appends 4-field CSV rows: position,ssid,rssi,channel.
//! No header row is guaranteed. A header that does appear is harmless —
//! its rssi field fails numeric coercion and the sanitizer drops it.

use crate::error::{EngineError, EngineResult};
use std::fs;
use std::path::Path;

/// One feed row, still textual. Sanitization happens downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub position: String,
    pub ssid: String,
    pub rssi: String,
    pub channel: String,
}

/// Split one feed line into a RawRow.
///
/// The SSID itself may contain commas: the position is the first field,
/// rssi/channel are the last two, and everything between is rejoined.
pub fn parse_line(line: &str) -> Option<RawRow> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 4 {
        return None;
    }
    Some(RawRow {
        position: fields[0].to_string(),
        ssid: fields[1..fields.len() - 2].join(","),
        rssi: fields[fields.len() - 2].to_string(),
        channel: fields[fields.len() - 1].to_string(),
    })
}

/// Read the whole capture feed in capture order.
///
/// Absence of the feed is the one fatal error in the pipeline: there is
/// nothing to analyze and the caller must ask for a capture first.
pub fn load_feed(path: &Path) -> EngineResult<Vec<RawRow>> {
    let text = fs::read_to_string(path).map_err(|source| EngineError::MissingSource {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(row) => rows.push(row),
            None => log::debug!("feed row with fewer than 4 fields dropped: {line:?}"),
        }
    }
    Ok(rows)
}
