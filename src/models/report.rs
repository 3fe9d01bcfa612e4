//! Evaluation report model
//!
//! The report is the single output of an evaluation: the total score with
//! its decision, the per-category findings that produced it, and the fully
//! rendered narrative so downstream consumers do no further interpretation
//! of raw scores.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::finding::{CategoryResult, ScoreCategory};

/// Coarse priority tier derived from the total score, for display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityTier {
    /// Below the prioritization threshold
    Low,
    /// At or above the threshold, below the high cutoff
    Medium,
    /// At or above the high cutoff
    High,
}

impl PriorityTier {
    /// Get the Spanish display name used in reports
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Low => "BAJA",
            Self::Medium => "MEDIA",
            Self::High => "ALTA",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Complete result of one referral evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Reference of the evaluated patient/referral
    pub patient_ref: String,
    /// Sum of all category subtotals
    pub total_score: u32,
    /// Fixed maximum plausible score used as percentage denominator
    pub max_theoretical_score: u32,
    /// `total_score / max_theoretical_score * 100`, unclamped
    pub percentage: f64,
    /// Whether the referral should be prioritized
    pub prioritize: bool,
    /// Display tier derived from the total score
    pub tier: PriorityTier,
    /// Per-category findings, in the fixed evaluation order
    pub categories: Vec<CategoryResult>,
    /// Fully rendered narrative rationale
    pub narrative: String,
    /// Instant the evaluation was performed
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationReport {
    /// Look up the result of a specific category
    #[must_use]
    pub fn category(&self, category: ScoreCategory) -> Option<&CategoryResult> {
        self.categories.iter().find(|c| c.category == category)
    }
}
