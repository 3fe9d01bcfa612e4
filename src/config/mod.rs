//! Configuration for the scoring engine.
//!
//! The decision constants are configuration data rather than request
//! parameters so that clinical rule changes stay auditable independently
//! of the code that calls the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default score at or above which a referral is prioritized
pub const DEFAULT_PRIORITY_THRESHOLD: u32 = 15;

/// Default score at or above which the tier becomes high
pub const DEFAULT_HIGH_CUTOFF: u32 = 25;

/// Default maximum plausible score across all categories combined
pub const DEFAULT_MAX_THEORETICAL_SCORE: u32 = 50;

/// Configuration for the aggregation and decision step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Total score at or above which the referral is prioritized
    pub threshold: u32,
    /// Total score at or above which the tier is reported as high
    pub high_cutoff: u32,
    /// Fixed maximum plausible score, denominator of the percentage
    pub max_theoretical_score: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_PRIORITY_THRESHOLD,
            high_cutoff: DEFAULT_HIGH_CUTOFF,
            max_theoretical_score: DEFAULT_MAX_THEORETICAL_SCORE,
        }
    }
}

impl fmt::Display for ScoringConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scoring Configuration:")?;
        writeln!(f, "  Prioritization Threshold: {}", self.threshold)?;
        writeln!(f, "  High Tier Cutoff: {}", self.high_cutoff)?;
        writeln!(f, "  Max Theoretical Score: {}", self.max_theoretical_score)?;
        Ok(())
    }
}
