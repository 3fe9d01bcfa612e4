//! Aggregation and decision making
//!
//! Pure arithmetic over already-computed findings: sum the category
//! subtotals, compare against the fixed threshold, derive the percentage
//! of the theoretical maximum and the display tier.

use crate::config::ScoringConfig;
use crate::models::finding::CategoryResult;
use crate::models::report::PriorityTier;

/// The aggregated decision for one evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Sum of all category subtotals
    pub total_score: u32,
    /// `total_score / max_theoretical_score * 100`, unclamped
    pub percentage: f64,
    /// Whether the referral should be prioritized
    pub prioritize: bool,
    /// Display tier derived from the total score
    pub tier: PriorityTier,
}

/// Aggregate category results into the final decision
///
/// The tier is a presentation derivative of the total score and is never
/// used to re-derive `prioritize`.
#[must_use]
pub fn aggregate(categories: &[CategoryResult], config: &ScoringConfig) -> Decision {
    let total_score: u32 = categories.iter().map(|c| c.subtotal).sum();

    let percentage = if config.max_theoretical_score == 0 {
        0.0
    } else {
        f64::from(total_score) / f64::from(config.max_theoretical_score) * 100.0
    };

    let prioritize = total_score >= config.threshold;

    let tier = if total_score >= config.high_cutoff {
        PriorityTier::High
    } else if total_score >= config.threshold {
        PriorityTier::Medium
    } else {
        PriorityTier::Low
    };

    Decision {
        total_score,
        percentage,
        prioritize,
        tier,
    }
}
