//! The `Policy` trait — the extension point for scripted agents.

use gridcook_core::Action;

use crate::{PolicyResult, SessionView};

/// Pluggable per-slot agent behavior.
///
/// Invoked exactly once per tick per NPC slot, in ascending slot order,
/// synchronously — the tick does not proceed to the stepper until every
/// policy has answered.  The `&mut self` receiver lets implementations
/// keep private counters across calls (a fixed action cycle, a phase
/// index); the session never resets or inspects that state.
///
/// A returned error aborts the in-flight tick and terminates the episode
/// through the session's failure boundary.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysSouth;
///
/// impl<S> Policy<S> for AlwaysSouth {
///     fn decide(&mut self, _view: &SessionView<'_, S>) -> PolicyResult<Action> {
///         Ok(Action::South)
///     }
/// }
/// ```
pub trait Policy<S>: Send {
    /// Decide this slot's action for the current tick.
    fn decide(&mut self, view: &SessionView<'_, S>) -> PolicyResult<Action>;
}
