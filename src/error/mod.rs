//! Error handling for the priority scoring engine.
//!
//! Almost every irregular input is absorbed by the scoring rules: unknown
//! names fall back to per-category defaults and absent optional fields are
//! omitted. The engine itself only raises on a snapshot that carries no
//! population-derivable data, or on criteria data that cannot be parsed.

/// Specialized error type for the scoring engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The snapshot is structurally incomplete and cannot be evaluated
    #[error("snapshot is missing required element: {0}")]
    MissingRequiredElement(&'static str),

    /// The criteria catalog data could not be parsed
    #[error("catalog data error: {0}")]
    CatalogData(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
