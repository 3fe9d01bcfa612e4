//! Diagnostic-support evaluator

use crate::catalog::Catalog;
use crate::models::finding::{CategoryResult, Finding, ScoreCategory};
use crate::models::population::PopulationType;
use crate::models::snapshot::PatientSnapshot;

/// Score the requested diagnostic-support studies of a snapshot
#[must_use]
pub fn evaluate(
    snapshot: &PatientSnapshot,
    _population: PopulationType,
    catalog: &Catalog,
) -> CategoryResult {
    let findings = snapshot
        .diagnostic_studies
        .iter()
        .map(|study| {
            let points = catalog.study_points(study);
            Finding::new(
                "Estudio de apoyo diagnóstico".to_string(),
                study.clone(),
                points,
                catalog.interpretation_for(points).to_string(),
            )
        })
        .collect();

    CategoryResult::from_findings(ScoreCategory::DiagnosticSupport, findings)
}
