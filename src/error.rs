use thiserror::Error;

/// Convenience alias for results produced by this library
pub type SparkResult<T> = Result<T, AppError>;

/// Main error type for the library
///
/// Only hard failures are represented here. A desired-allocation fund the
/// account does not hold is a skipped slot in the balancer output, and a
/// zero-denominator proportion is coerced to zero; neither is an error.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required path or discriminator field was absent from an upstream
    /// payload. This means the upstream API shape drifted from the schema
    /// map and is not recoverable locally.
    #[error("schema mismatch in {payload} payload: missing `{path}`")]
    SchemaMismatch {
        /// Which payload failed to match (e.g. "static data", "holdings")
        payload: &'static str,
        /// Dotted path to the field that was absent
        path: String,
    },

    /// Input supplied by the caller was rejected
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A payload fragment could not be decoded into its typed record
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The gateway collaborator failed to supply a payload
    #[error("gateway error: {0}")]
    Gateway(String),
}

impl AppError {
    /// Builds a [`AppError::SchemaMismatch`] with its payload and path context
    pub fn schema_mismatch(payload: &'static str, path: impl Into<String>) -> Self {
        AppError::SchemaMismatch {
            payload,
            path: path.into(),
        }
    }
}
