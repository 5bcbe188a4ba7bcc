//! Error types for gridcook-trace.

use thiserror::Error;

/// Errors that can occur while recording or submitting a trajectory.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("submission to {endpoint} failed: {reason}")]
    Submit { endpoint: String, reason: String },
}

/// Alias for `Result<T, TraceError>`.
pub type TraceResult<T> = Result<T, TraceError>;
