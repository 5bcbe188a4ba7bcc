//! Read-only episode state passed to every policy call.

use gridcook_core::{SlotId, Tick};

/// A read-only snapshot of the episode passed to [`Policy::decide`][crate::Policy::decide].
///
/// Built once per tick by the episode session and shared immutably across
/// all NPC decisions for that tick; only `slot` varies between calls.  The
/// state borrow lives for the joint-action freeze — the session holds off
/// every mutation until all policies have answered.
#[derive(Clone, Copy)]
pub struct SessionView<'a, S> {
    /// The state the joint action under construction will act on.
    pub state: &'a S,

    /// Current tick counter.
    pub tick: Tick,

    /// The slot being decided.
    pub slot: SlotId,

    /// Whole seconds remaining in the episode, clamped at zero.
    pub time_left_secs: u64,

    /// Score accumulated so far.
    pub score: f64,
}
