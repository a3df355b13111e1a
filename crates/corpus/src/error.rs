//! Corpus Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Schema violations that make a table unusable as a corpus
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Required column absent from the header
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Label value other than 0 or 1
    #[error("Row {row}: label {value:?} is not 0 (complex) or 1 (simple)")]
    InvalidLabel { row: usize, value: String },

    /// Sentence length that is not a non-negative integer
    #[error("Row {row}: word count {value:?} is not a non-negative integer")]
    InvalidLength { row: usize, value: String },
}

/// Errors while loading a corpus from storage
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be opened
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Table read but not a valid corpus
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
