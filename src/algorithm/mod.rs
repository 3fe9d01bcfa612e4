//! Scoring algorithm for referral prioritization
//!
//! This module contains the scoring pipeline: the per-category evaluators,
//! the aggregation/decision step, the narrative generator and the
//! orchestration façade that ties them together.

pub mod aggregate;
pub mod engine;
pub mod evaluators;
pub mod narrative;

pub use aggregate::Decision;
pub use engine::{evaluate_referral, evaluate_referral_at};
pub use narrative::narrate;
