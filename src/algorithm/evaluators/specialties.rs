//! Requested-specialties evaluator

use crate::catalog::Catalog;
use crate::models::finding::{CategoryResult, Finding, ScoreCategory};
use crate::models::population::PopulationType;
use crate::models::snapshot::PatientSnapshot;

/// Score the requested specialty consults of a snapshot
///
/// Unlike the other name tables, unrecognized specialties default to the
/// intermediate tier: any specialty consult implies non-trivial complexity.
#[must_use]
pub fn evaluate(
    snapshot: &PatientSnapshot,
    _population: PopulationType,
    catalog: &Catalog,
) -> CategoryResult {
    let findings = snapshot
        .specialties
        .iter()
        .map(|specialty| {
            let points = catalog.specialty_points(specialty);
            Finding::new(
                "Especialidad solicitada".to_string(),
                specialty.clone(),
                points,
                catalog.interpretation_for(points).to_string(),
            )
        })
        .collect();

    CategoryResult::from_findings(ScoreCategory::Specialties, findings)
}
