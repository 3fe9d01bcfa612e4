//! General/demographic evaluator: age and referring institution

use crate::catalog::Catalog;
use crate::models::finding::{CategoryResult, Finding, ScoreCategory};
use crate::models::population::PopulationType;
use crate::models::snapshot::PatientSnapshot;

/// Score the demographic data of a snapshot
///
/// An absent age or institution is omitted; an unknown institution is
/// recorded as a 0-point finding for auditability.
#[must_use]
pub fn evaluate(
    snapshot: &PatientSnapshot,
    _population: PopulationType,
    catalog: &Catalog,
) -> CategoryResult {
    let mut findings = Vec::new();

    if let Some(age) = snapshot.age_years {
        let points = catalog.age_points(age);
        findings.push(Finding::new(
            "Edad".to_string(),
            format!("{age} años"),
            points,
            catalog.interpretation_for(points).to_string(),
        ));
    }

    if let Some(institution) = &snapshot.referring_institution {
        let points = catalog.institution_points(institution);
        findings.push(Finding::new(
            "Institución remitente".to_string(),
            institution.clone(),
            points,
            catalog.interpretation_for(points).to_string(),
        ));
    }

    CategoryResult::from_findings(ScoreCategory::General, findings)
}
