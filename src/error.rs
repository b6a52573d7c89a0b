//! Error types for table loading and feature transformation.

use std::fmt;

/// Error type for all table and transformation operations.
#[derive(Debug)]
pub enum TransformError {
    /// A required column is absent from the input table.
    MissingColumn(String),
    /// A numeric or categorical column has no observed values, so its
    /// imputation statistic is undefined.
    EmptyColumn(String),
    /// A cell could not be interpreted for the column's declared role.
    InvalidValue { column: String, value: String },
    /// A categorical value was not part of the vocabulary learned at fit time.
    UnseenCategory { column: String, value: String },
    /// Column names or count differ from the columns seen during fit.
    ColumnMismatch { expected: usize, got: usize },
    /// Row or block shape disagreement.
    InvalidShape { expected: String, got: String },
    /// No fitted state is available for the requested transform.
    NotFitted(String),
    /// Empty data provided where non-empty was required.
    EmptyData(String),
    /// Serialization or deserialization error.
    SerializationError(String),
    /// I/O error during file operations.
    IoError(String),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::MissingColumn(name) => {
                write!(f, "Missing column: {}", name)
            }
            TransformError::EmptyColumn(name) => {
                write!(f, "Column {} has no observed values", name)
            }
            TransformError::InvalidValue { column, value } => {
                write!(f, "Invalid value in column {}: {}", column, value)
            }
            TransformError::UnseenCategory { column, value } => {
                write!(f, "Unseen category in column {}: {}", column, value)
            }
            TransformError::ColumnMismatch { expected, got } => {
                write!(f, "Column mismatch: expected {} columns, got {}", expected, got)
            }
            TransformError::InvalidShape { expected, got } => {
                write!(f, "Invalid shape: expected {}, got {}", expected, got)
            }
            TransformError::NotFitted(msg) => {
                write!(f, "Not fitted: {}", msg)
            }
            TransformError::EmptyData(msg) => {
                write!(f, "Empty data: {}", msg)
            }
            TransformError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            TransformError::IoError(msg) => {
                write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for TransformError {}

impl From<std::io::Error> for TransformError {
    fn from(err: std::io::Error) -> Self {
        TransformError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for TransformError {
    fn from(err: bincode::Error) -> Self {
        TransformError::SerializationError(err.to_string())
    }
}

impl From<csv::Error> for TransformError {
    fn from(err: csv::Error) -> Self {
        TransformError::IoError(err.to_string())
    }
}
