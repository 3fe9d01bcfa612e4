//! Symptom evaluator with population-specific vocabularies

use crate::catalog::Catalog;
use crate::models::finding::{CategoryResult, Finding, ScoreCategory};
use crate::models::population::PopulationType;
use crate::models::snapshot::PatientSnapshot;

/// Score the reported symptoms of a snapshot
///
/// Every listed symptom is recorded. A symptom outside the population's
/// vocabulary scores 0 but stays in the findings, so the report shows it
/// as present but not clinically weighted.
#[must_use]
pub fn evaluate(
    snapshot: &PatientSnapshot,
    population: PopulationType,
    catalog: &Catalog,
) -> CategoryResult {
    let findings = snapshot
        .symptoms
        .iter()
        .map(|symptom| match catalog.symptom_points(population, symptom) {
            Some(points) => Finding::new(
                "Síntoma".to_string(),
                symptom.clone(),
                points,
                catalog.interpretation_for(points).to_string(),
            ),
            None => Finding::new(
                "Síntoma".to_string(),
                symptom.clone(),
                0,
                "Síntoma registrado sin ponderación clínica para esta población.".to_string(),
            ),
        })
        .collect();

    CategoryResult::from_findings(ScoreCategory::Symptoms, findings)
}
