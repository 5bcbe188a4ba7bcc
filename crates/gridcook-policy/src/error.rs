//! Error types for gridcook-policy.

use thiserror::Error;

/// Failure raised by a policy's decision function.
///
/// The slot it belongs to is attached by the episode session, which knows
/// which slot it was deciding.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("policy failure: {0}")]
    Failure(String),
}

/// Alias for `Result<T, PolicyError>`.
pub type PolicyResult<T> = Result<T, PolicyError>;
