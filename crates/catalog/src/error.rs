//! Error types for the catalog crate.
//!
//! Only loading can fail. Once entries are in a `CatalogIndex`, every
//! downstream operation is infallible.

use thiserror::Error;

/// Errors that can occur while loading and indexing catalog files
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File or directory could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A catalog file was not a valid JSON array of entries
    ///
    /// `line` and `column` come straight from serde_json
    #[error("Parse error at line {line}, column {column} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// Two entries share the same id
    #[error("Duplicate entry id: {id}")]
    DuplicateId { id: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
