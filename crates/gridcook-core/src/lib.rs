//! `gridcook-core` — foundational types for the gridcook episode runner.
//!
//! This crate is a dependency of every other `gridcook-*` crate.  It
//! intentionally has no `gridcook-*` dependencies and minimal external ones
//! (`rand`, `thiserror`, `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `SlotId`                                          |
//! | [`action`] | `Action`, `JointAction`                           |
//! | [`keymap`] | `Key`, `KeyBinding`, `Keymap`                     |
//! | [`time`]   | `Tick`, `EpisodeClock`, `TickTimer`               |
//! | [`config`] | `EpisodeConfig`, `MdpParams`                      |
//! | [`rng`]    | `SessionRng`                                      |
//! | [`error`]  | `CoreError`, `CoreResult`                         |

pub mod action;
pub mod config;
pub mod error;
pub mod ids;
pub mod keymap;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::{Action, JointAction};
pub use config::{EpisodeConfig, MdpParams};
pub use error::{CoreError, CoreResult};
pub use ids::SlotId;
pub use keymap::{Key, KeyBinding, Keymap};
pub use rng::SessionRng;
pub use time::{EpisodeClock, Tick, TickTimer};
