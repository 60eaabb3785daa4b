use thiserror::Error;

/// Errors surfaced by the scoring engine.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Structural problem with a factor set, detected before any arithmetic runs.
    #[error("{0}")]
    Validation(String),

    /// The requested model name is not in the registry.
    #[error("model '{0}' not found")]
    ModelNotFound(String),

    /// A factor in the input has no corresponding weight (advanced model).
    /// A missing weight is never treated as zero.
    #[error("no weight configured for factor '{0}'")]
    MissingWeight(String),

    /// Error raised by a caller-supplied custom model, passed through unchanged.
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}
