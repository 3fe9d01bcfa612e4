//! Logging utilities
//!
//! This module provides standardized logging functions for evaluations.
//! Observability stays out of the pure scoring and narrative code: only
//! the orchestration façade calls these helpers.

use crate::algorithm::aggregate::Decision;
use crate::models::finding::CategoryResult;
use crate::models::population::PopulationType;

/// Log the start of an evaluation with consistent format
pub fn log_evaluation_start(patient_ref: &str, population: PopulationType) {
    log::info!("Evaluating referral {patient_ref} as population {population}");
}

/// Log one category's result with consistent format
pub fn log_category_result(category: &CategoryResult) {
    log::debug!(
        "Category {} scored {} across {} findings",
        category.category,
        category.subtotal,
        category.findings.len()
    );
}

/// Log the completion of an evaluation with consistent format
pub fn log_evaluation_complete(patient_ref: &str, decision: &Decision) {
    log::info!(
        "Referral {patient_ref} scored {} ({:.1}%), prioritize={}, tier={}",
        decision.total_score,
        decision.percentage,
        decision.prioritize,
        decision.tier
    );
}
