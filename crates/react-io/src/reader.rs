//! Data reader trait and I/O errors

use crate::schema::{DataColumn, DataSchema};
use thiserror::Error;

/// Errors that can occur during I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Type mismatch in column {column}: expected {expected}, got {actual}")]
    TypeMismatch {
        column: String,
        expected: String,
        actual: String,
    },

    #[error("JSON error in {path}: {message}")]
    Json { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Column access to a loaded table
pub trait DataReader {
    /// Read the schema (column names and types)
    fn read_schema(&self) -> IoResult<DataSchema>;

    /// Read a single column by name
    fn read_column(&self, name: &str) -> IoResult<DataColumn>;

    /// Read a column and convert it to `f64`, failing for non-numeric data
    fn read_numeric_column(&self, name: &str) -> IoResult<Vec<f64>> {
        let column = self.read_column(name)?;
        column.to_f64().ok_or_else(|| IoError::TypeMismatch {
            column: name.to_string(),
            expected: "numeric".to_string(),
            actual: format!("{:?}", column.dtype()),
        })
    }
}

/// A boxed reader for dynamic dispatch
pub type BoxedReader = Box<dyn DataReader>;

/// Open a table file, checking its extension
pub fn open_file(path: &str) -> IoResult<BoxedReader> {
    let extension = path
        .rsplit('.')
        .next()
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => Ok(Box::new(crate::csv_reader::CsvReader::open(path)?)),
        _ => Err(IoError::InvalidFormat(format!(
            "Unknown file extension: {}",
            extension
        ))),
    }
}
