//! Error types for the river-crossing crate

use thiserror::Error;

/// Failures while presenting a search outcome.
///
/// The search itself cannot fail: an unsolvable start is reported through
/// [`crate::solver::SolverStatus`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using the crate Error type
pub type Result<T> = std::result::Result<T, Error>;
