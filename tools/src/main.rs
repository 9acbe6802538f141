//! map-runner: headless risk-map generator for WTTM.
//!
//! Usage:
//!   map-runner --input wifi_data.csv --out risk_metadata.json
//!   map-runner --config engine.json
//!   map-runner --reset

use anyhow::Result;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use wttm_core::{config::EngineConfig, engine::RiskEngine, error::EngineError, export, feed};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let input = parse_arg(&args, "--input", "wifi_data.csv");
    let out = parse_arg(&args, "--out", "risk_metadata.json");

    if args.iter().any(|a| a == "--reset") {
        reset(&input, &out)?;
        println!("Feed and metadata cleared.");
        return Ok(());
    }

    let config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => EngineConfig::load(Path::new(&w[1]))?,
        None => EngineConfig::default(),
    };

    let rows = match feed::load_feed(Path::new(&input)) {
        Ok(rows) => rows,
        Err(EngineError::MissingSource { .. }) => {
            eprintln!("Error: '{input}' not found. Please run a capture first.");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let engine = RiskEngine::new(config);
    let analysis = engine.analyze(&rows);
    export::write_metadata(&analysis.records, Path::new(&out))?;

    let summary = analysis.summary();
    println!("WTTM — map-runner");
    println!("  generated:     {}", chrono::Local::now().format("%d %b %Y | %H:%M"));
    println!("  input:         {input}");
    println!("  scan points:   {}", summary.total_points);
    println!("  grid:          {0}x{0}", analysis.grid.size);
    println!("  high alerts:   {}", summary.high_alerts);
    println!("  medium alerts: {}", summary.medium_alerts);
    println!("  metadata:      {out}");

    Ok(())
}

fn parse_arg(args: &[String], flag: &str, default: &str) -> String {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
        .unwrap_or_else(|| default.to_string())
}

/// The external reset operation: clears both the raw feed and the exported
/// metadata. A file that is already absent counts as cleared.
fn reset(input: &str, out: &str) -> Result<()> {
    for path in [input, out] {
        match fs::remove_file(path) {
            Ok(()) => log::info!("removed {path}"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
