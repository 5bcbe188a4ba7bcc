//! Episode and simulation-parameter configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, SlotId};

// ── MdpParams ─────────────────────────────────────────────────────────────────

/// Simulation parameters handed to the stepper and persisted verbatim in
/// the trajectory record (`mdp_params`).
///
/// The episode orchestrator never interprets these beyond passing the order
/// queue to the stepper's start-state constructor; their meaning belongs to
/// the simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MdpParams {
    /// Grid terrain, one string per row.
    pub layout: Vec<String>,
    /// Ticks of prep work before a dish can be served.
    pub cook_time_ticks: u32,
    /// Order queue the start state is built from, first order first.
    pub initial_orders: Vec<String>,
    /// Dish served when an interact lands with the order queue empty.
    pub default_serve: String,
    /// Reward paid per delivered order.
    pub delivery_reward: f64,
}

impl Default for MdpParams {
    fn default() -> Self {
        MdpParams {
            layout: vec![
                "XXPXX".into(),
                "O   O".into(),
                "X   X".into(),
                "XDSXX".into(),
            ],
            cook_time_ticks: 3,
            initial_orders: vec!["onion_soup".into(), "onion_soup".into()],
            default_serve: "onion_soup".into(),
            delivery_reward: 20.0,
        }
    }
}

// ── EpisodeConfig ─────────────────────────────────────────────────────────────

/// Top-level episode configuration.
///
/// An explicit record with named fields: every optional collaborator
/// (policies, renderer, observer, sink) defaults at the session builder,
/// and the fields here are validated once, at construction, instead of
/// being probed dynamically during play.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EpisodeConfig {
    /// Session label persisted as `game_type`.
    pub session_type: String,

    /// Number of agent slots in the joint action.
    pub num_slots: usize,

    /// The slot the keyboard drives.
    pub human_slot: SlotId,

    /// Fixed wall-clock tick interval, milliseconds.
    pub tick_interval_ms: u64,

    /// Episode duration budget, seconds.
    pub episode_duration_secs: u64,

    /// Seed for stochastic scripted policies.
    pub seed: u64,

    /// Identifier of the surface the renderer draws into.  Opaque here;
    /// renderer implementations decide what it names.
    pub render_target: String,

    /// Per-frame animation budget hint passed through to renderers, ms.
    pub render_animation_ms: u64,

    /// Simulation parameters forwarded to the stepper.
    pub params: MdpParams,
}

impl EpisodeConfig {
    /// Check field-level invariants.  Called by the session builder.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_slots == 0 {
            return Err(CoreError::Config("episode needs at least one agent slot".into()));
        }
        if self.human_slot.index() >= self.num_slots {
            return Err(CoreError::SlotOutOfRange {
                slot: self.human_slot,
                num_slots: self.num_slots,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(CoreError::Config("tick interval must be non-zero".into()));
        }
        if self.episode_duration_secs == 0 {
            return Err(CoreError::Config("episode duration must be non-zero".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[inline]
    pub fn episode_duration(&self) -> Duration {
        Duration::from_secs(self.episode_duration_secs)
    }
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        EpisodeConfig {
            session_type: "gridcook".into(),
            num_slots: 2,
            human_slot: SlotId(0),
            tick_interval_ms: 150,
            episode_duration_secs: 60,
            seed: 42,
            render_target: "board".into(),
            render_animation_ms: 140,
            params: MdpParams::default(),
        }
    }
}
