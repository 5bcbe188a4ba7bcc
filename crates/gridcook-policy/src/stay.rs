//! A policy that never acts.

use gridcook_core::Action;

use crate::{Policy, PolicyResult, SessionView};

/// Always returns `Stay`.  Useful as a passive opponent and in tests.
pub struct StayPolicy;

impl<S> Policy<S> for StayPolicy {
    fn decide(&mut self, _view: &SessionView<'_, S>) -> PolicyResult<Action> {
        Ok(Action::Stay)
    }
}
