//! Error types for the verdict crate

use thiserror::Error;

/// Main error type for the verdict crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("evaluator requires at least one aggregator")]
    EmptyAggregatorSet,

    #[error("weight {value} must be non-negative and finite")]
    InvalidWeight { value: f64 },

    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("sparse index {index} is not strictly greater than its predecessor {previous}")]
    UnorderedSparseIndex { index: usize, previous: usize },

    #[error("failed to parse example on line {line}: {message}")]
    ParseExample { line: usize, message: String },

    #[error("sparsity {value} must be within [0, 1]")]
    InvalidSparsity { value: f64 },

    #[error("dataset has no examples")]
    EmptyDataset,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
