//! Vital-signs evaluator with population-specific range bands

use crate::catalog::{Catalog, VitalMetric};
use crate::models::finding::{CategoryResult, Finding, ScoreCategory};
use crate::models::population::PopulationType;
use crate::models::snapshot::PatientSnapshot;

/// Score the measured vital signs of a snapshot
///
/// Only vitals that were actually measured produce findings; an absent
/// vital does not appear at all, so the report never implies a normal
/// reading that was not taken.
#[must_use]
pub fn evaluate(
    snapshot: &PatientSnapshot,
    population: PopulationType,
    catalog: &Catalog,
) -> CategoryResult {
    let vitals = &snapshot.vital_signs;
    let mut findings = Vec::new();

    for metric in VitalMetric::all() {
        let value = match metric {
            VitalMetric::HeartRate => vitals.heart_rate,
            VitalMetric::RespiratoryRate => vitals.respiratory_rate,
            VitalMetric::SystolicPressure => vitals.systolic_pressure,
            VitalMetric::DiastolicPressure => vitals.diastolic_pressure,
            VitalMetric::Temperature => vitals.temperature,
            VitalMetric::OxygenSaturation => vitals.oxygen_saturation,
            VitalMetric::GlasgowScore => vitals.glasgow_score.map(f64::from),
        };

        let Some(value) = value else {
            continue;
        };

        if let Some(band) = catalog.vital_band(population, metric, value) {
            findings.push(Finding::new(
                metric.display_name().to_string(),
                format!("{value} {}", metric.unit()),
                band.points,
                format!(
                    "{}. {}",
                    band.descriptor,
                    catalog.interpretation_for(band.points)
                ),
            ));
        }
    }

    CategoryResult::from_findings(ScoreCategory::VitalSigns, findings)
}
