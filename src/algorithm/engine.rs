//! Orchestration façade
//!
//! The single public entry point of the engine. Resolves the population
//! type once, runs the eight category evaluators in their fixed
//! contractual order (insurance last), aggregates the findings into a
//! decision and renders the narrative. Each invocation is pure given its
//! inputs and retains no state, so concurrent evaluations of different
//! referrals are trivially safe.

use chrono::{DateTime, Utc};

use crate::algorithm::evaluators::{
    clinical, diagnostics, general, insurance, services, specialties, symptoms, vitals,
};
use crate::algorithm::{aggregate, narrative};
use crate::catalog::Catalog;
use crate::config::ScoringConfig;
use crate::error::Result;
use crate::models::report::EvaluationReport;
use crate::models::snapshot::PatientSnapshot;
use crate::utils;

/// Evaluate a referral snapshot, stamping the current instant
///
/// The only raising path is a snapshot with no population-derivable data;
/// every other irregularity is absorbed by the scoring rules.
pub fn evaluate_referral(
    snapshot: &PatientSnapshot,
    catalog: &Catalog,
    config: &ScoringConfig,
) -> Result<EvaluationReport> {
    evaluate_referral_at(snapshot, catalog, config, Utc::now())
}

/// Evaluate a referral snapshot against an explicit evaluation instant
///
/// Admission recency is measured against `evaluated_at`, which makes the
/// whole report reproducible for a fixed instant.
pub fn evaluate_referral_at(
    snapshot: &PatientSnapshot,
    catalog: &Catalog,
    config: &ScoringConfig,
    evaluated_at: DateTime<Utc>,
) -> Result<EvaluationReport> {
    let population = snapshot.resolve_population()?;
    utils::log_evaluation_start(&snapshot.patient_ref, population);

    // Fixed contractual order; insurance is always evaluated and summed
    // last, after every clinical category.
    let categories = vec![
        general::evaluate(snapshot, population, catalog),
        clinical::evaluate(snapshot, population, catalog, evaluated_at),
        vitals::evaluate(snapshot, population, catalog),
        symptoms::evaluate(snapshot, population, catalog),
        services::evaluate(snapshot, population, catalog),
        specialties::evaluate(snapshot, population, catalog),
        diagnostics::evaluate(snapshot, population, catalog),
        insurance::evaluate(snapshot, population, catalog),
    ];

    for category in &categories {
        utils::log_category_result(category);
    }

    let decision = aggregate::aggregate(&categories, config);
    let narrative = narrative::narrate(
        &snapshot.patient_ref,
        population,
        &categories,
        &decision,
        config,
    );

    utils::log_evaluation_complete(&snapshot.patient_ref, &decision);

    Ok(EvaluationReport {
        patient_ref: snapshot.patient_ref.clone(),
        total_score: decision.total_score,
        max_theoretical_score: config.max_theoretical_score,
        percentage: decision.percentage,
        prioritize: decision.prioritize,
        tier: decision.tier,
        categories,
        narrative,
        evaluated_at,
    })
}
