//! Error types emitted by the courier CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use courier_core::{QueryError, SimulationError};
use courier_data::DataError;
use thiserror::Error;

/// Errors emitted by the courier CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A referenced input path does not exist or is not a regular file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Flag naming the input.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
    },
    /// An input file could not be loaded.
    #[error("failed to load dataset: {0}")]
    Data(#[from] Box<DataError>),
    /// Routing the delivery day failed.
    #[error("simulation failed: {0}")]
    Simulation(#[from] Box<SimulationError>),
    /// A query named a package that is not on the roster.
    #[error(transparent)]
    Query(#[from] QueryError),
    /// Serializing a JSON report failed.
    #[error("failed to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),
    /// Writing output or reading interactive input failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DataError> for CliError {
    fn from(err: DataError) -> Self {
        Self::Data(Box::new(err))
    }
}

impl From<SimulationError> for CliError {
    fn from(err: SimulationError) -> Self {
        Self::Simulation(Box::new(err))
    }
}
