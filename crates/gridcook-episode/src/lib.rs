//! `gridcook-episode` — the episode orchestrator.
//!
//! # Tick anatomy
//!
//! ```text
//! each tick (fixed wall-clock interval):
//!   ① Freeze    — neutral joint action, latched human action, then one
//!                 NPC policy decision per slot in ascending slot order.
//!   ② Step      — external stepper: (state, joint) → (next, p, reward).
//!   ③ Record    — append (state, joint, reward) to the trajectory.
//!   ④ Replace   — state ← next (wholesale), score += reward.
//!   ⑤ Re-clock  — time left from wall-clock elapsed, not tick count.
//!   ⑥ Re-arm    — tick count += 1, input latch opens for one action.
//!   ⑦ Notify    — renderer draws, observer gets the tick snapshot.
//!   ⑧ Expiry    — duration spent → clamp time-left to zero and stop().
//! ```
//!
//! A tick is logically atomic: the input latch is closed before any of the
//! synchronous work and re-opened only at ⑥, so a key press arriving
//! mid-tick can never corrupt the action this tick already froze.
//!
//! The session lifecycle is `Idle → Running → Terminated`, `Terminated`
//! absorbing.  `stop()` is idempotent, callable from outside, from the
//! expiry path inside the tick handler, and from the fault boundary in
//! [`EpisodeSession::run`] — the trajectory submits exactly once in all
//! cases.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut session = EpisodeBuilder::new(config, ToyKitchen::new(2, &params))
//!     .policies(PolicySet::new().with(SlotId(1), Box::new(CyclePolicy::default())))
//!     .sink(Box::new(JsonFileSink::new("trajectories")))
//!     .build()?;
//! session.run()?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod render;
pub mod session;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::EpisodeBuilder;
pub use error::{EpisodeError, EpisodeResult};
pub use observer::{EpisodeObserver, EpisodeSummary, NoopObserver, TickRecord};
pub use render::{NoopRenderer, Renderer};
pub use session::{EpisodeSession, StopHandle, TickOutcome};
