//! Dataset loading for the parts and steps catalogs.
//!
//! The two catalogs are semicolon-delimited text files with a header row;
//! the first column is the unique row key. Both are read fully into memory
//! at startup and shared as immutable tables for the process lifetime —
//! nothing in this system ever mutates them.

pub mod delimited;
pub mod loader;

pub use delimited::Records;
pub use loader::{DatasetLoader, Datasets, PARTS_FILE, STEPS_FILE};

use std::path::PathBuf;

use crate::models::TableError;

/// Errors raised while loading a dataset file.
///
/// All variants are fatal at startup; there is no partial-data mode.
#[derive(Debug, thiserror::Error)]
pub enum DatasetLoadError {
    /// The dataset file does not exist.
    #[error("dataset file not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The dataset file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The dataset file contains bytes that are not valid UTF-8.
    #[error("{} is not valid UTF-8", path.display())]
    Encoding {
        /// Path that was being decoded.
        path: PathBuf,
    },

    /// The file is empty or has no header row.
    #[error("{file}: missing header row")]
    MissingHeader {
        /// Dataset file name.
        file: String,
    },

    /// A column required by the schema is absent from the header.
    #[error("{file}: missing required column '{column}'")]
    MissingColumn {
        /// Dataset file name.
        file: String,
        /// Name of the absent column.
        column: String,
    },

    /// A data row has more fields than the header declares.
    #[error("{file} line {line}: expected at most {expected} fields, got {found}")]
    MalformedRow {
        /// Dataset file name.
        file: String,
        /// 1-based line number of the offending row.
        line: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of fields found on the row.
        found: usize,
    },

    /// Row keys failed table validation (duplicate or empty key).
    #[error("{file}: {source}")]
    InvalidKeys {
        /// Dataset file name.
        file: String,
        /// Underlying table validation error.
        #[source]
        source: TableError,
    },

    /// The dataset parsed but contains no rows.
    #[error("{file}: dataset has no rows")]
    Empty {
        /// Dataset file name.
        file: String,
    },
}
