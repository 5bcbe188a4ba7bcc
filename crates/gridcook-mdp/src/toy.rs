//! A miniature kitchen stepper for tests and demos.
//!
//! Just enough kitchen to exercise every episode-runner path: prep counters
//! that actions move, an order queue that interacts drain, and a sparse
//! delivery reward.  Not a simulation of anything.

use serde::{Deserialize, Serialize};

use gridcook_core::{Action, JointAction, MdpParams};

use crate::{StepError, StepOutcome, StepResult, Stepper};

/// State of the toy kitchen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToyState {
    /// Prep progress per agent slot; `North` preps (+1), `South` discards (−1).
    pub prep: Vec<i32>,
    /// Orders not yet served, first order first.
    pub pending_orders: Vec<String>,
    /// Dishes delivered so far.
    pub served: u32,
    /// The dish most recently delivered, if any.
    pub last_served: Option<String>,
}

/// Minimal [`Stepper`] over [`ToyState`].
///
/// `North` adds one unit of prep for the acting slot, `South` removes one
/// (floored at zero), and `Interact` delivers once that slot's prep has
/// reached `cook_time_ticks` — popping the next pending order, or falling
/// back to the configured default dish when the queue has drained, and
/// paying `delivery_reward` either way.  `East`/`West`/`Stay` do nothing.
pub struct ToyKitchen {
    num_slots: usize,
    cook_time: i32,
    default_serve: String,
    delivery_reward: f64,
}

impl ToyKitchen {
    pub fn new(num_slots: usize, params: &MdpParams) -> Self {
        ToyKitchen {
            num_slots,
            cook_time: params.cook_time_ticks as i32,
            default_serve: params.default_serve.clone(),
            delivery_reward: params.delivery_reward,
        }
    }
}

impl Stepper for ToyKitchen {
    type State = ToyState;

    fn start_state(&self, orders: &[String]) -> StepResult<ToyState> {
        Ok(ToyState {
            prep: vec![0; self.num_slots],
            pending_orders: orders.to_vec(),
            served: 0,
            last_served: None,
        })
    }

    fn transition(
        &self,
        state: &ToyState,
        joint: &JointAction,
    ) -> StepResult<StepOutcome<ToyState>> {
        if joint.len() != self.num_slots {
            return Err(StepError::JointArity {
                expected: self.num_slots,
                got: joint.len(),
            });
        }

        let mut next = state.clone();
        let mut reward = 0.0;

        for (i, &action) in joint.actions().iter().enumerate() {
            match action {
                Action::North => next.prep[i] += 1,
                Action::South => next.prep[i] = (next.prep[i] - 1).max(0),
                Action::Interact if next.prep[i] >= self.cook_time => {
                    next.prep[i] = 0;
                    let dish = if next.pending_orders.is_empty() {
                        self.default_serve.clone()
                    } else {
                        next.pending_orders.remove(0)
                    };
                    next.last_served = Some(dish);
                    next.served += 1;
                    reward += self.delivery_reward;
                }
                _ => {}
            }
        }

        Ok(StepOutcome {
            next_state: next,
            probability: 1.0,
            reward,
        })
    }
}
