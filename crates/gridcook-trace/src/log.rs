//! Per-episode trajectory accumulator.

use serde::Serialize;

use gridcook_core::{JointAction, MdpParams};

use crate::{TraceResult, TrajectoryData, TrajectoryRecord};

/// Append-only log of one episode's per-tick transitions.
///
/// Three parallel sequences — serialized observations, serialized joint
/// actions, rewards — stay index-aligned by construction:
/// [`record`][Self::record] serializes both JSON forms *before* touching
/// any sequence, so a failed serialization appends nothing and a
/// successful one appends to all three.
pub struct TrajectoryLog {
    observations: Vec<String>,
    actions: Vec<String>,
    rewards: Vec<f64>,
    start_time_secs: i64,
    session_type: String,
    params: MdpParams,
}

impl TrajectoryLog {
    pub fn new(start_time_secs: i64, session_type: String, params: MdpParams) -> Self {
        TrajectoryLog {
            observations: Vec::new(),
            actions: Vec::new(),
            rewards: Vec::new(),
            start_time_secs,
            session_type,
            params,
        }
    }

    /// Append one tick's transition.  Atomic across the three sequences.
    pub fn record<S: Serialize>(
        &mut self,
        state: &S,
        joint: &JointAction,
        reward: f64,
    ) -> TraceResult<()> {
        let observation = serde_json::to_string(state)?;
        let action = serde_json::to_string(joint)?;
        self.observations.push(observation);
        self.actions.push(action);
        self.rewards.push(reward);
        Ok(())
    }

    /// Ticks recorded so far; all three sequences share this length.
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    /// Package the accumulated sequences and metadata into the persisted
    /// record.  Consuming `self` makes a second finalize unrepresentable.
    pub fn finalize(self) -> TrajectoryRecord {
        TrajectoryRecord {
            start_time: self.start_time_secs,
            game_type: self.session_type,
            trajectory_data: TrajectoryData {
                ep_observations: vec![self.observations],
                ep_actions: vec![self.actions],
                ep_rewards: vec![self.rewards],
                mdp_params: vec![self.params],
            },
        }
    }
}
