use std::io;

use camino::Utf8PathBuf;
use courier_core::{PackageId, TruckError};
use thiserror::Error;

/// Errors raised while loading courier input files.
///
/// Row and column numbers are 1-based, matching what a spreadsheet shows.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        /// Requested path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The CSV reader failed, usually on malformed quoting or encoding.
    #[error("failed to read CSV from {path}: {source}")]
    Csv {
        /// File being read.
        path: Utf8PathBuf,
        /// Parser failure.
        #[source]
        source: csv::Error,
    },
    /// A record has the wrong shape.
    #[error("{path}:{row}: {reason}")]
    MalformedRecord {
        /// File being read.
        path: Utf8PathBuf,
        /// Offending row.
        row: usize,
        /// What was wrong with the record.
        reason: String,
    },
    /// A package identifier is not a non-negative integer.
    #[error("{path}:{row}: invalid package id {value:?}")]
    InvalidPackageId {
        /// File being read.
        path: Utf8PathBuf,
        /// Offending row.
        row: usize,
        /// Raw cell contents.
        value: String,
    },
    /// A package identifier appears twice in the roster.
    #[error("{path}:{row}: package {id} is listed more than once")]
    DuplicatePackage {
        /// File being read.
        path: Utf8PathBuf,
        /// Row of the repeated entry.
        row: usize,
        /// Repeated identifier.
        id: PackageId,
    },
    /// A stop index is not a non-negative integer.
    #[error("{path}:{row}: invalid stop index {value:?}")]
    InvalidStopIndex {
        /// File being read.
        path: Utf8PathBuf,
        /// Offending row.
        row: usize,
        /// Raw cell contents.
        value: String,
    },
    /// A distance cell is not a finite, non-negative number.
    #[error("{path}:{row}:{column}: invalid distance {value:?}")]
    InvalidDistance {
        /// File being read.
        path: Utf8PathBuf,
        /// Offending row.
        row: usize,
        /// Offending column.
        column: usize,
        /// Raw cell contents.
        value: String,
    },
    /// The fleet manifest is not valid JSON for the expected schema.
    #[error("failed to parse fleet manifest {path}: {source}")]
    Fleet {
        /// File being read.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// A truck entry in the fleet manifest was rejected.
    #[error("invalid truck in fleet manifest {path}: {source}")]
    Truck {
        /// File being read.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: TruckError,
    },
}
