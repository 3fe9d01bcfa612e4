//! Command-line evaluation of a referral snapshot
//!
//! Reads a `PatientSnapshot` from a JSON file, optionally a criteria
//! catalog from a second JSON file, runs the scoring engine and prints the
//! rendered narrative.
//!
//! Usage: `evaluate_referral <snapshot.json> [catalog.json]`

use std::fs;
use std::path::Path;

use anyhow::Context;
use prio_engine::{Catalog, PatientSnapshot, ScoringConfig, evaluate_referral};

fn load_snapshot(path: &Path) -> anyhow::Result<PatientSnapshot> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse snapshot file {}", path.display()))
}

fn load_catalog(path: Option<&String>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file {path}"))?;
            Catalog::from_json(&data)
                .with_context(|| format!("Failed to parse catalog file {path}"))
        }
        None => Ok(Catalog::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let snapshot_path = args
        .get(1)
        .context("Usage: evaluate_referral <snapshot.json> [catalog.json]")?;

    let snapshot = load_snapshot(Path::new(snapshot_path))?;
    let catalog = load_catalog(args.get(2))?;
    let config = ScoringConfig::default();

    let report = evaluate_referral(&snapshot, &catalog, &config)?;

    println!("{}", report.narrative);
    log::info!(
        "Catalog version {}: referral {} scored {}/{} (prioritize: {})",
        catalog.version,
        report.patient_ref,
        report.total_score,
        report.max_theoretical_score,
        report.prioritize
    );

    Ok(())
}
