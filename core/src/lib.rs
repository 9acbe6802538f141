//! WTTM core — the risk-scoring and terrain-aggregation engine behind the
//! Wireless Threat Terrain Mapper.
//!
//! One synchronous batch pass turns a capture feed of
//! (position, ssid, rssi, channel) rows into per-location risk records, a
//! square terrain grid, and the exported metadata consumed by the
//! dashboard and report collaborators. The engine is pure and stateless
//! between runs; capture, rendering, and serving live elsewhere.

pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod feed;
pub mod label;
pub mod risk;
pub mod sanitizer;
pub mod spike;
pub mod terrain;
pub mod threat;
pub mod types;
