//! Fixed-cycle scripted policy — the default NPC fallback.

use gridcook_core::Action;

use crate::{Policy, PolicyResult, SessionView};

/// Cycles through a fixed action sequence, holding each action for a
/// configurable number of ticks before advancing, and wrapping at the end.
///
/// This is the minimal demonstration of the policy contract and the
/// fallback the session installs for NPC slots when no mapping is supplied.
pub struct CyclePolicy {
    sequence: Vec<Action>,
    repeat: u32,
    cursor: usize,
    held: u32,
}

impl CyclePolicy {
    /// A policy over `sequence`, holding each action `repeat` ticks.
    /// A `repeat` of zero is treated as one.
    pub fn new(sequence: Vec<Action>, repeat: u32) -> Self {
        CyclePolicy {
            sequence,
            repeat: repeat.max(1),
            cursor: 0,
            held: 0,
        }
    }
}

impl Default for CyclePolicy {
    /// A four-action cardinal tour, two ticks per action.
    fn default() -> Self {
        CyclePolicy::new(
            vec![Action::North, Action::East, Action::South, Action::West],
            2,
        )
    }
}

impl<S> Policy<S> for CyclePolicy {
    fn decide(&mut self, _view: &SessionView<'_, S>) -> PolicyResult<Action> {
        let Some(&action) = self.sequence.get(self.cursor) else {
            return Ok(Action::Stay); // empty sequence
        };
        self.held += 1;
        if self.held >= self.repeat {
            self.held = 0;
            self.cursor = (self.cursor + 1) % self.sequence.len();
        }
        Ok(action)
    }
}
