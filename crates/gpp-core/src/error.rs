//! Error types shared across the dashboard crates.
//!
//! [`DataLoadError`] covers everything that can go wrong while turning a
//! delimited file into a [`PlantDataset`](crate::PlantDataset); it is fatal at
//! startup. [`GppError`] covers the outputs around it: aggregate export and
//! the configuration file.
//!
//! A country that matches no rows is *not* an error: every pipeline operation
//! returns an empty aggregate instead.

use crate::record::PlantColumn;
use thiserror::Error;

/// Failure while loading the plant dataset.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The file could not be opened or read
    #[error("cannot read dataset '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a readable delimited table
    #[error("malformed dataset: {0}")]
    Malformed(String),

    /// A required column is absent from the header row
    #[error("dataset is missing required column '{header}' ({column})")]
    MissingColumn { column: PlantColumn, header: String },

    /// A cell could not be interpreted (rows are 1-based, header excluded)
    #[error("row {row}: invalid {column}: {reason}")]
    InvalidValue {
        row: usize,
        column: PlantColumn,
        reason: String,
    },
}

/// Unified error type for dashboard operations.
#[derive(Error, Debug)]
pub enum GppError {
    /// I/O errors (file access, sockets, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Aggregate export errors
    #[error("Export error: {0}")]
    Export(String),
}

/// Convenience type alias for Results using GppError.
pub type GppResult<T> = Result<T, GppError>;
