//! The `EpisodeSession` — state machine, tick handler, and run loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error, info, warn};

use gridcook_core::{EpisodeClock, EpisodeConfig, JointAction, Tick, TickTimer};
use gridcook_input::{InputHandle, InputListener};
use gridcook_mdp::{StepOutcome, Stepper};
use gridcook_policy::{PolicySet, SessionView};
use gridcook_trace::{TrajectoryLog, TrajectorySink};

use crate::{EpisodeError, EpisodeObserver, EpisodeResult, EpisodeSummary, Renderer, TickRecord};

// ── StopHandle ────────────────────────────────────────────────────────────────

/// Cloneable cancellation flag.
///
/// Raising it makes [`EpisodeSession::run`] terminate the episode at the
/// next tick boundary — the escape hatch for callers (a quit key, a signal
/// handler) that cannot reach the blocked session to call `stop()`.
#[derive(Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Per-episode state that exists only while `Running`.
///
/// Holding it inside the `Running` variant makes the lifecycle checks
/// structural: a tick cannot touch episode state outside `Running`, and
/// `stop()` moving it out is what makes a second trajectory submission
/// unrepresentable.
struct Live<S> {
    state: S,
    clock: EpisodeClock,
    log: TrajectoryLog,
}

enum Phase<S> {
    Idle,
    Running(Live<S>),
    Terminated,
}

/// Outcome of one [`EpisodeSession::step`] call.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// The tick completed and the episode continues.
    Advanced,
    /// The tick completed, the duration budget is spent, and the session
    /// has stopped itself.
    Finished,
    /// The session is not running; nothing happened.
    Inactive,
}

// ── EpisodeSession ────────────────────────────────────────────────────────────

/// The episode orchestrator.
///
/// Owns everything the episode needs — stepper, policies, input listener,
/// trajectory log, renderer, observer, sink — exclusively.  Nothing is
/// shared across sessions, so no cross-session mutation is possible by
/// construction.
///
/// Lifecycle: `Idle → Running → Terminated`.  [`start`][Self::start] is
/// the only way in, [`stop`][Self::stop] the only way out, and
/// `Terminated` is absorbing.  Create via
/// [`EpisodeBuilder`][crate::EpisodeBuilder].
pub struct EpisodeSession<M: Stepper> {
    config: EpisodeConfig,
    stepper: M,
    policies: PolicySet<M::State>,
    listener: InputListener,
    renderer: Box<dyn Renderer<M::State>>,
    observer: Box<dyn EpisodeObserver<M::State>>,
    sink: Box<dyn TrajectorySink>,
    phase: Phase<M::State>,
    tick: Tick,
    score: f64,
    stop_flag: StopHandle,
}

impl<M: Stepper> EpisodeSession<M> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        config: EpisodeConfig,
        stepper: M,
        policies: PolicySet<M::State>,
        listener: InputListener,
        renderer: Box<dyn Renderer<M::State>>,
        observer: Box<dyn EpisodeObserver<M::State>>,
        sink: Box<dyn TrajectorySink>,
    ) -> Self {
        EpisodeSession {
            config,
            stepper,
            policies,
            listener,
            renderer,
            observer,
            sink,
            phase: Phase::Idle,
            tick: Tick::ZERO,
            score: 0.0,
            stop_flag: StopHandle::new(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Begin the episode: build the start state, start the wall clock,
    /// attach and arm the input listener, and render the first frame —
    /// synchronously, before any tick can fire.
    ///
    /// Only legal from `Idle`; a running session rejects a second `start`
    /// and a terminated one can never restart.
    pub fn start(&mut self) -> EpisodeResult<()> {
        match self.phase {
            Phase::Idle => {}
            Phase::Running(_) => return Err(EpisodeError::AlreadyStarted),
            Phase::Terminated => return Err(EpisodeError::Terminated),
        }

        let state = self.stepper.start_state(&self.config.params.initial_orders)?;
        let clock = EpisodeClock::start(self.config.episode_duration());
        let log = TrajectoryLog::new(
            clock.start_unix_secs(),
            self.config.session_type.clone(),
            self.config.params.clone(),
        );

        self.renderer.draw_state(&state);
        self.renderer.draw_score(0.0);
        self.renderer.draw_time_left(clock.time_left_display());

        self.listener.attach();
        self.listener.arm();
        self.tick = Tick::ZERO;
        self.score = 0.0;
        self.phase = Phase::Running(Live { state, clock, log });
        info!(
            session = %self.config.session_type,
            slots = self.config.num_slots,
            duration_secs = self.config.episode_duration_secs,
            "episode started"
        );
        Ok(())
    }

    /// Execute one tick.
    ///
    /// Logically atomic: the input latch closes before any synchronous work
    /// and reopens only after the state replacement and logging are done,
    /// so a key press arriving mid-tick waits for the next tick instead of
    /// corrupting this one.  Outside `Running` this is a no-op returning
    /// [`TickOutcome::Inactive`] (covers a queued tick firing after a
    /// concurrent stop).
    ///
    /// A policy or stepper fault aborts the tick and propagates; the
    /// trajectory keeps only fully-recorded ticks.
    pub fn step(&mut self) -> EpisodeResult<TickOutcome> {
        let Phase::Running(live) = &mut self.phase else {
            return Ok(TickOutcome::Inactive);
        };

        // ① Freeze the joint action: neutral, the latched human action,
        // then NPC decisions in ascending slot order.  A policy registered
        // for the human slot overwrites the latched value.
        self.listener.disarm();
        let mut joint = JointAction::neutral(self.config.num_slots);
        if let Some(action) = self.listener.take() {
            joint.set(self.config.human_slot, action);
        }
        let time_left_at_freeze = live.clock.time_left_display();
        for (slot, policy) in self.policies.iter_mut() {
            let view = SessionView {
                state: &live.state,
                tick: self.tick,
                slot,
                time_left_secs: time_left_at_freeze,
                score: self.score,
            };
            let action = policy
                .decide(&view)
                .map_err(|source| EpisodeError::Policy { slot, source })?;
            joint.set(slot, action);
        }

        // ② External transition.  Only the single returned state is used;
        // the probability is carried in the outcome, never branched on.
        let StepOutcome { next_state, probability: _, reward } =
            self.stepper.transition(&live.state, &joint)?;

        // ③ Record before replacing, so the logged observation is the
        // state the joint action acted on.
        live.log.record(&live.state, &joint, reward)?;

        // ④ Replace the state wholesale; no reader can ever observe a
        // half-updated state.
        let prev_state = std::mem::replace(&mut live.state, next_state);
        self.score += reward;

        // ⑤ Remaining time from the wall clock, not the tick count.
        let time_left = live.clock.time_left_display();
        let expired = live.clock.expired();

        // ⑥ One more human action may now latch.
        self.tick = self.tick.offset(1);
        self.listener.arm();

        // ⑦ Fire-and-forget notifications.
        self.renderer.draw_state(&live.state);
        self.renderer.draw_score(self.score);
        self.renderer.draw_time_left(time_left);
        let record = TickRecord {
            prev_state: &prev_state,
            joint_action: &joint,
            next_state: &live.state,
            reward,
            time_left_secs: time_left,
            score: self.score,
            elapsed: live.clock.elapsed(),
            tick: self.tick,
            timestamp_unix_ms: live.clock.now_unix_ms(),
        };
        self.observer.on_tick(&record);
        debug!(tick = %self.tick, %joint, reward, score = self.score, time_left, "tick");

        // ⑧ Duration budget spent → clamp (time_left is already the
        // clamped form) and terminate from inside the tick path.
        if expired {
            self.stop();
            return Ok(TickOutcome::Finished);
        }
        Ok(TickOutcome::Advanced)
    }

    /// `start()` plus the fixed-interval loop: wait one tick interval,
    /// step, repeat — until expiry, a raised [`StopHandle`], or a fault.
    ///
    /// Ticks are strictly sequential; the blocking timer makes overlapping
    /// ticks impossible, and deadlines a slow tick overran are skipped.
    /// On a fault the session stops itself *first* — the partial
    /// trajectory still submits and the completion callback still fires —
    /// and the error is then returned.  A wedged half-dead episode is not
    /// an outcome.
    pub fn run(&mut self) -> EpisodeResult<()> {
        self.start()?;
        let mut timer = TickTimer::new(self.config.tick_interval());
        loop {
            timer.wait();
            if self.stop_flag.is_raised() {
                self.stop();
                return Ok(());
            }
            match self.step() {
                Ok(TickOutcome::Advanced) => {}
                Ok(TickOutcome::Finished | TickOutcome::Inactive) => return Ok(()),
                Err(e) => {
                    error!(error = %e, "tick aborted; terminating episode");
                    self.stop();
                    return Err(e);
                }
            }
        }
    }

    /// Terminate the episode.
    ///
    /// Idempotent: the first call moves the live state out of `Running`,
    /// detaches the input listener, finalizes and submits the trajectory
    /// exactly once, closes the renderer, and fires the completion
    /// callback.  Any later call finds nothing to clean up and returns.
    /// A submission failure is logged with its reason and does not block
    /// the remaining cleanup.
    pub fn stop(&mut self) {
        let phase = std::mem::replace(&mut self.phase, Phase::Terminated);
        let Phase::Running(live) = phase else {
            return;
        };

        self.listener.detach();

        let elapsed = live.clock.elapsed();
        let record = live.log.finalize();
        let submitted = match self.sink.submit(&record) {
            Ok(receipt) => {
                info!(destination = %receipt.destination, "trajectory submitted");
                true
            }
            Err(e) => {
                warn!(error = %e, "trajectory submission failed");
                false
            }
        };

        self.renderer.close();
        let summary = EpisodeSummary {
            ticks: self.tick.0,
            score: self.score,
            elapsed,
            submitted,
        };
        self.observer.on_episode_end(&summary);
        info!(ticks = self.tick.0, score = self.score, ?elapsed, "episode terminated");
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &EpisodeConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.phase, Phase::Terminated)
    }

    /// Completed ticks so far.
    pub fn tick_count(&self) -> u64 {
        self.tick.0
    }

    /// Accumulated score.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// The current simulation state, while running.
    pub fn state(&self) -> Option<&M::State> {
        match &self.phase {
            Phase::Running(live) => Some(&live.state),
            _ => None,
        }
    }

    /// Ticks recorded in the trajectory so far, while running.
    pub fn recorded_ticks(&self) -> usize {
        match &self.phase {
            Phase::Running(live) => live.log.len(),
            _ => 0,
        }
    }

    /// Clamped seconds remaining, while running.
    pub fn time_left_secs(&self) -> Option<u64> {
        match &self.phase {
            Phase::Running(live) => Some(live.clock.time_left_display()),
            _ => None,
        }
    }

    /// Cancellation flag observed by [`run`][Self::run] at tick boundaries.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop_flag.clone()
    }

    /// Feeder for the thread that produces this session's key events.
    pub fn input_handle(&self) -> InputHandle {
        self.listener.handle()
    }
}
