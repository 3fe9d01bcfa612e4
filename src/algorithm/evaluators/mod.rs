//! Category evaluators
//!
//! One module per scoring category. Every evaluator consumes the snapshot,
//! the resolved population type and the criteria catalog, and returns the
//! category's scored findings. Evaluators never raise: absent optional
//! fields are omitted and unknown names degrade to the category default.

pub mod clinical;
pub mod diagnostics;
pub mod general;
pub mod insurance;
pub mod services;
pub mod specialties;
pub mod symptoms;
pub mod vitals;
