//! `gridcook-input` — human input capture for the episode runner.
//!
//! The human side of a tick is a one-shot latch: the session arms it after
//! finishing a tick's synchronous work, the first recognized key press
//! latches one action and closes the window, and the session takes the
//! value at the next joint-action freeze.  However many keys arrive in
//! between, at most one action lands per tick, and a key press arriving
//! mid-tick can never corrupt the action already frozen.
//!
//! The [`InputListener`] owns the latch and the key table for exactly one
//! episode — attached at `start()`, detached at `stop()`, never left
//! dangling across sessions.  Event producers hold a cloneable
//! [`InputHandle`] and stay decoupled from the session's lifecycle.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `terminal` | [`TerminalKeys`]: a crossterm polling thread        |

pub mod latch;
pub mod listener;
#[cfg(feature = "terminal")]
pub mod terminal;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use latch::ActionLatch;
pub use listener::{InputHandle, InputListener};
#[cfg(feature = "terminal")]
pub use terminal::TerminalKeys;
