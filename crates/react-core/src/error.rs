//! Error types for react-core
//!
//! Nothing here is recovered from: every variant propagates to the caller
//! and ends the run.

use react_io::IoError;
use thiserror::Error;

/// Main error type for extraction operations
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input could not be found, opened or parsed
    #[error("Failed to read input: {0}")]
    Input(#[from] IoError),

    /// A required column is absent from the metrics table
    #[error("Column '{column}' not found in metrics table")]
    MissingColumn { column: String },

    /// A required column holds non-numeric data
    #[error("Column '{column}' is not numeric")]
    NonNumericColumn { column: String },

    /// A column has a different length than the month column
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    RowCountMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Output could not be written
    #[error("Failed to write output to {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: IoError,
    },
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
