//! Error types for gridcook-episode.

use thiserror::Error;

use gridcook_core::{CoreError, SlotId};
use gridcook_mdp::StepError;
use gridcook_policy::PolicyError;
use gridcook_trace::TraceError;

/// Errors raised by session construction and the tick path.
#[derive(Debug, Error)]
pub enum EpisodeError {
    #[error("episode already started")]
    AlreadyStarted,

    #[error("terminated episode cannot be restarted")]
    Terminated,

    #[error("invalid configuration: {0}")]
    Config(#[from] CoreError),

    #[error("policy for {slot} aborted the tick: {source}")]
    Policy {
        slot: SlotId,
        #[source]
        source: PolicyError,
    },

    #[error("stepper aborted the tick: {0}")]
    Stepper(#[from] StepError),

    #[error("trajectory recording failed: {0}")]
    Trace(#[from] TraceError),
}

/// Alias for `Result<T, EpisodeError>`.
pub type EpisodeResult<T> = Result<T, EpisodeError>;
