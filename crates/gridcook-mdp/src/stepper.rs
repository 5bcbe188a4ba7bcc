//! The `Stepper` trait — the main external seam of the episode runner.

use serde::Serialize;

use gridcook_core::JointAction;

use crate::StepResult;

/// One selected transition returned by the stepper.
#[derive(Clone, Debug)]
pub struct StepOutcome<S> {
    /// The selected next state — authoritative for the episode.
    pub next_state: S,
    /// Likelihood the stepper assigned to `next_state`.  Carried for
    /// completeness; the orchestrator never branches on it.
    pub probability: f64,
    /// Sparse reward earned by the joint action.
    pub reward: f64,
}

/// External simulation transition function.
///
/// The episode session owns exactly one `Stepper` and treats its state as
/// opaque: states are held by value, replaced wholesale each tick,
/// serialized into the trajectory, and handed to renderers and policies by
/// shared reference — never mutated in place.  `Clone` supports the
/// replace-don't-mutate discipline; `Serialize` feeds the trajectory log.
///
/// Both operations are fallible: a failing stepper aborts the in-flight
/// tick and the session shuts the episode down cleanly instead of wedging.
pub trait Stepper {
    /// Opaque simulation state.
    type State: Clone + Serialize + Send + 'static;

    /// Construct the start state from the configured order queue.
    fn start_state(&self, orders: &[String]) -> StepResult<Self::State>;

    /// Advance one discrete step under `joint`.
    fn transition(
        &self,
        state: &Self::State,
        joint: &JointAction,
    ) -> StepResult<StepOutcome<Self::State>>;
}
