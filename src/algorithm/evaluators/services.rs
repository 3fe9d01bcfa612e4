//! Requested-services evaluator

use crate::catalog::Catalog;
use crate::models::finding::{CategoryResult, Finding, ScoreCategory};
use crate::models::population::PopulationType;
use crate::models::snapshot::PatientSnapshot;

/// Score the requested services of a snapshot
///
/// The service table is population-independent; unknown services score 0.
#[must_use]
pub fn evaluate(
    snapshot: &PatientSnapshot,
    _population: PopulationType,
    catalog: &Catalog,
) -> CategoryResult {
    let findings = snapshot
        .services
        .iter()
        .map(|service| {
            let points = catalog.service_points(service);
            Finding::new(
                "Servicio solicitado".to_string(),
                service.clone(),
                points,
                catalog.interpretation_for(points).to_string(),
            )
        })
        .collect();

    CategoryResult::from_findings(ScoreCategory::Services, findings)
}
