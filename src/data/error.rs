//! Error types for data operations
//!
//! Every error here is recoverable at the page level: the caller turns it
//! into a status message and keeps the previously loaded dataset.

use thiserror::Error;

/// Malformed CSV text. Row numbers are 1-based with the header as row 1.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("CSV must have at least a header and one data row")]
    MissingDataRows,

    #[error("Row {row} has {found} columns, expected {expected}")]
    FieldCount {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Duplicate column name '{name}' in header")]
    DuplicateColumn { name: String },
}

/// A selection that refers to a column the current dataset does not have.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Column '{column}' is not in the current dataset")]
    UnknownColumn { column: String },
}

/// Projection of a dataset onto chart records failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// A selected Y column holds text in some row; first-row inference
    /// classified it as numeric.
    #[error("Column '{column}' holds non-numeric value '{value}' in row {row}")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Column '{column}' collides with the chart label field")]
    ReservedColumn { column: String },
}

/// Errors that can occur while loading or charting an uploaded file
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file type '.{extension}', please upload a CSV file")]
    UnsupportedExtension { extension: String },

    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: u64 },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
