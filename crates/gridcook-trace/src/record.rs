//! The persisted trajectory record shape.
//!
//! Field names here are the wire contract with the persistence endpoint —
//! do not rename.

use serde::{Deserialize, Serialize};

use gridcook_core::MdpParams;

/// Everything the persistence endpoint receives for one finished episode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    /// Episode start, Unix seconds.
    pub start_time: i64,
    /// The session type label from the episode configuration.
    pub game_type: String,
    pub trajectory_data: TrajectoryData,
}

/// Per-episode sequences, one outer list entry per episode.
///
/// A single live session produces exactly one episode, so each outer list
/// has length one; the nesting matches what downstream analysis expects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryData {
    /// Serialized pre-transition states, one per tick.
    pub ep_observations: Vec<Vec<String>>,
    /// Serialized joint actions, one per tick.
    pub ep_actions: Vec<Vec<String>>,
    /// Rewards, one per tick.
    pub ep_rewards: Vec<Vec<f64>>,
    /// The simulation configuration the episode ran under.
    pub mdp_params: Vec<MdpParams>,
}
