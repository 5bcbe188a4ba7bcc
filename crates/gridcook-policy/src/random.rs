//! Uniformly random scripted policy.

use gridcook_core::{Action, SessionRng, SlotId};

use crate::{Policy, PolicyResult, SessionView};

/// Samples uniformly from the full action alphabet on every tick.
///
/// Deterministic for a given `(seed, slot)` pair, so a recorded episode
/// against random opponents replays identically from its config.
pub struct RandomPolicy {
    rng: SessionRng,
}

impl RandomPolicy {
    pub fn new(seed: u64, slot: SlotId) -> Self {
        RandomPolicy {
            rng: SessionRng::for_slot(seed, slot),
        }
    }
}

impl<S> Policy<S> for RandomPolicy {
    fn decide(&mut self, _view: &SessionView<'_, S>) -> PolicyResult<Action> {
        // ALL is non-empty, so choose cannot return None.
        Ok(*self.rng.choose(&Action::ALL).unwrap_or(&Action::Stay))
    }
}
