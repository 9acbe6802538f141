//! Shared primitive types used across the entire engine.

/// A survey point identifier (e.g. "P5").
pub type PositionId = String;

/// Received signal strength in dBm. Coerced to a float on ingest,
/// matching the feed's numeric tolerance.
pub type Rssi = f64;

/// A Wi-Fi channel number.
pub type Channel = i64;
