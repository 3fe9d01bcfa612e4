//! Clinical/temporal evaluator: population type and admission recency

use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::models::finding::{CategoryResult, Finding, ScoreCategory};
use crate::models::population::PopulationType;
use crate::models::snapshot::PatientSnapshot;

/// Score the clinical/temporal data of a snapshot
///
/// The population type always produces a finding. Admission recency is
/// measured against `evaluated_at`; a missing admission time is omitted
/// rather than treated as an error. An admission instant after the
/// evaluation instant (clock skew at the boundary) clamps to zero hours.
#[must_use]
pub fn evaluate(
    snapshot: &PatientSnapshot,
    population: PopulationType,
    catalog: &Catalog,
    evaluated_at: DateTime<Utc>,
) -> CategoryResult {
    let mut findings = Vec::new();

    let population_points = catalog.population_points(population);
    findings.push(Finding::new(
        "Tipo de población".to_string(),
        population.display_name().to_string(),
        population_points,
        catalog.interpretation_for(population_points).to_string(),
    ));

    if let Some(admitted_at) = snapshot.admitted_at {
        let elapsed_hours = (evaluated_at - admitted_at).num_hours().max(0) as u64;
        let points = catalog.admission_points(elapsed_hours);
        findings.push(Finding::new(
            "Tiempo desde la admisión".to_string(),
            format!("hace {elapsed_hours} horas"),
            points,
            catalog.interpretation_for(points).to_string(),
        ));
    }

    CategoryResult::from_findings(ScoreCategory::Clinical, findings)
}
