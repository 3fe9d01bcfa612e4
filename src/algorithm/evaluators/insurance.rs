//! Insurance/coverage evaluator
//!
//! Contractually the last category: every clinical category is scored
//! before financial coverage enters the total, and the façade must not
//! short-circuit a decision before this evaluator has run.

use crate::catalog::Catalog;
use crate::models::finding::{CategoryResult, Finding, ScoreCategory};
use crate::models::population::PopulationType;
use crate::models::snapshot::PatientSnapshot;

/// Score the insurance coverage of a snapshot
///
/// An unrecognized or absent insurer scores the "other/unclassified" tier
/// rather than 0, so coverage always contributes exactly one finding.
#[must_use]
pub fn evaluate(
    snapshot: &PatientSnapshot,
    _population: PopulationType,
    catalog: &Catalog,
) -> CategoryResult {
    let (observed, points) = match &snapshot.insurer {
        Some(insurer) => (insurer.clone(), catalog.insurer_points(insurer)),
        None => ("No especificada".to_string(), catalog.insurer_default),
    };

    let findings = vec![Finding::new(
        "Aseguranza".to_string(),
        observed,
        points,
        catalog.interpretation_for(points).to_string(),
    )];

    CategoryResult::from_findings(ScoreCategory::Insurance, findings)
}
