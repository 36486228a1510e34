//! Error types for simulation runs.
//!
//! Every failure is reported synchronously to the caller. A failed call
//! never leaves partially simulated state behind: the process set keeps
//! its inputs and the cached results of the simulator are cleared.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Simulation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimulationError {
    /// A run parameter is out of range (e.g. a zero time quantum).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// No processes were supplied.
    #[error("No processes to schedule")]
    EmptyInput,

    /// The process set failed validation.
    #[error("Invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Metrics were requested for a process that never completed.
    #[error("Process '{0}' has no completion time")]
    IncompleteRun(String),

    /// An algorithm name could not be parsed.
    #[error("Unknown algorithm '{0}'. Valid: fcfs, sjf, srtf, rr")]
    UnknownAlgorithm(String),
}

impl SimulationError {
    /// Create an invalid parameter error
    #[inline]
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
