//! Error types for gridcook-mdp.

use thiserror::Error;

/// Errors a stepper may raise.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("joint action has {got} slots, stepper expects {expected}")]
    JointArity { expected: usize, got: usize },

    #[error("stepper failure: {0}")]
    Internal(String),
}

/// Alias for `Result<T, StepError>`.
pub type StepResult<T> = Result<T, StepError>;
