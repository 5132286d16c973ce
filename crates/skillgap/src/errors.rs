use thiserror::Error;

/// Engine-level error type.
///
/// Every fallible operation in the crate returns `Result<T, EngineError>`.
/// Valid-but-empty outcomes (no skills detected, zero overlap) are not
/// errors: they surface as well-formed zero-valued reports instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The taxonomy source is missing, malformed, or semantically invalid
    /// (duplicate canonical names, alias collisions, out-of-range weights).
    /// Fatal at startup, never recoverable per request.
    #[error("Taxonomy load error: {0}")]
    TaxonomyLoad(String),

    /// The caller requested a role that is not in the taxonomy.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// The requirement set is empty. Scoring against zero required skills
    /// is a configuration defect, not a 0% or 100% match.
    #[error("No required skills defined for {0}")]
    EmptyRequirement(String),

    /// Extraction was called with input that is not decoded text,
    /// e.g. binary data that slipped past the upstream decoder.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::TaxonomyLoad(format!("invalid JSON: {e}"))
    }
}

impl From<std::io::Error> for EngineError {
    fn from(e: std::io::Error) -> Self {
        EngineError::TaxonomyLoad(format!("cannot read source: {e}"))
    }
}
