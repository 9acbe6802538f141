//! Sample sanitizer — turns raw feed rows into trusted samples.
//!
//! RULES:
//!   - A row is kept whole or dropped; it never gets patched in place.
//!   - position, cleaned SSID, and rssi are mandatory; channel is not.
//!   - Sanitization is pure: same rows in, same samples out.

use crate::{
    config::EngineConfig,
    feed::RawRow,
    types::{Channel, PositionId, Rssi},
};

/// A validated scan sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub position: PositionId,
    pub ssid: String,
    pub rssi: Rssi,
    /// None when the channel field failed numeric coercion. The sample
    /// still counts for rssi/ssid metrics, but not for channel reuse.
    pub channel: Option<Channel>,
}

/// Clean one SSID field. Returns None when it must be treated as missing:
/// too short, non-printable, or one of the blocklisted placeholders.
pub fn clean_ssid(raw: &str, config: &EngineConfig) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < config.min_ssid_chars {
        return None;
    }
    if trimmed.chars().any(|c| c.is_control()) {
        return None;
    }
    let lower = trimmed.to_lowercase();
    if config.ssid_blocklist.iter().any(|b| b.to_lowercase() == lower) {
        return None;
    }
    Some(trimmed.to_string())
}

fn coerce_rssi(raw: &str) -> Option<Rssi> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

fn coerce_channel(raw: &str) -> Option<Channel> {
    let trimmed = raw.trim();
    if let Ok(ch) = trimmed.parse::<Channel>() {
        return Some(ch);
    }
    // float-formatted channels like "6.0" still coerce
    let value: f64 = trimmed.parse().ok()?;
    value.is_finite().then_some(value as Channel)
}

/// Validate and normalize a batch of raw rows. Rejected rows are absorbed
/// silently (best-effort aggregation); the survivors keep capture order.
pub fn sanitize(rows: &[RawRow], config: &EngineConfig) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;

    for row in rows {
        let position = row.position.trim();
        if position.is_empty() {
            dropped += 1;
            continue;
        }
        let Some(ssid) = clean_ssid(&row.ssid, config) else {
            dropped += 1;
            continue;
        };
        let Some(rssi) = coerce_rssi(&row.rssi) else {
            dropped += 1;
            continue;
        };

        samples.push(Sample {
            position: position.to_string(),
            ssid,
            rssi,
            channel: coerce_channel(&row.channel),
        });
    }

    if dropped > 0 {
        log::debug!("sanitizer dropped {dropped} of {} feed rows", rows.len());
    }
    samples
}
