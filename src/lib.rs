//! A Rust library for deterministic priority scoring of hospital referrals,
//! with population-aware criteria, auditable findings and narrative reports.

pub mod algorithm;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::ScoringConfig;
pub use error::{EngineError, Result};

// Criteria catalog
pub use catalog::{Catalog, VitalMetric};

// Data model
pub use models::{
    CategoryResult, EvaluationReport, Finding, PatientSnapshot, PopulationType, PriorityTier,
    RiskLabel, ScoreCategory, VitalSigns,
};

// Scoring pipeline
pub use algorithm::{Decision, evaluate_referral, evaluate_referral_at};
