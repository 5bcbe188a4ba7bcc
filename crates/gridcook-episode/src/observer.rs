//! Episode observer — per-tick and completion callbacks.

use std::time::Duration;

use gridcook_core::{JointAction, Tick};

/// Snapshot of one completed tick, handed to
/// [`EpisodeObserver::on_tick`] after the tick's synchronous work.
pub struct TickRecord<'a, S> {
    /// State the joint action acted on.
    pub prev_state: &'a S,
    /// The joint action the stepper consumed.
    pub joint_action: &'a JointAction,
    /// State after the transition (now the session's current state).
    pub next_state: &'a S,
    /// Reward the transition paid.
    pub reward: f64,
    /// Whole seconds remaining, clamped at zero.
    pub time_left_secs: u64,
    /// Score including this tick's reward.
    pub score: f64,
    /// Wall-clock time since `start()`.
    pub elapsed: Duration,
    /// Completed-tick count including this tick.
    pub tick: Tick,
    /// Unix timestamp of the snapshot, milliseconds.
    pub timestamp_unix_ms: i64,
}

/// Final accounting delivered once, at termination.
#[derive(Clone, Debug)]
pub struct EpisodeSummary {
    /// Completed ticks.
    pub ticks: u64,
    /// Final score.
    pub score: f64,
    /// Wall-clock episode length.
    pub elapsed: Duration,
    /// Whether the trajectory submission succeeded.
    pub submitted: bool,
}

/// Callbacks invoked by the session at tick boundaries and at termination.
///
/// Both methods have default no-op implementations so implementors only
/// override what they care about; the default observer is exactly these
/// defaults.
pub trait EpisodeObserver<S>: Send {
    /// Called once per completed tick with the full transition snapshot.
    fn on_tick(&mut self, _record: &TickRecord<'_, S>) {}

    /// Called exactly once when the episode terminates, after the
    /// trajectory submission has been attempted.
    fn on_episode_end(&mut self, _summary: &EpisodeSummary) {}
}

/// An [`EpisodeObserver`] that does nothing.
pub struct NoopObserver;

impl<S> EpisodeObserver<S> for NoopObserver {}
