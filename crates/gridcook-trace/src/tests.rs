//! Unit tests for gridcook-trace.

use serde::Serialize;

use gridcook_core::{Action, JointAction, MdpParams, SlotId};

use crate::{JsonFileSink, MemorySink, TrajectoryLog, TrajectoryRecord, TrajectorySink};

#[derive(Serialize)]
struct FakeState {
    pot: u32,
}

fn sample_log(ticks: usize) -> TrajectoryLog {
    let mut log = TrajectoryLog::new(1_700_000_000, "gridcook".into(), MdpParams::default());
    for i in 0..ticks {
        let mut joint = JointAction::neutral(2);
        joint.set(SlotId(1), Action::South);
        log.record(&FakeState { pot: i as u32 }, &joint, i as f64).unwrap();
    }
    log
}

// ── TrajectoryLog ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod log_tests {
    use super::*;

    #[test]
    fn sequences_stay_aligned() {
        let log = sample_log(5);
        assert_eq!(log.len(), 5);
        let record = log.finalize();
        let data = &record.trajectory_data;
        assert_eq!(data.ep_observations[0].len(), 5);
        assert_eq!(data.ep_actions[0].len(), 5);
        assert_eq!(data.ep_rewards[0].len(), 5);
    }

    #[test]
    fn serialized_forms_are_stable_json() {
        let record = sample_log(1).finalize();
        let obs: serde_json::Value =
            serde_json::from_str(&record.trajectory_data.ep_observations[0][0]).unwrap();
        assert_eq!(obs["pot"], 0);
        let act: serde_json::Value =
            serde_json::from_str(&record.trajectory_data.ep_actions[0][0]).unwrap();
        assert_eq!(act, serde_json::json!(["stay", "south"]));
    }

    #[test]
    fn finalize_wraps_a_single_episode() {
        let record = sample_log(3).finalize();
        let data = &record.trajectory_data;
        assert_eq!(data.ep_observations.len(), 1);
        assert_eq!(data.ep_actions.len(), 1);
        assert_eq!(data.ep_rewards.len(), 1);
        assert_eq!(data.mdp_params.len(), 1);
        assert_eq!(data.ep_rewards[0], vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn record_shape_uses_wire_field_names() {
        let value = serde_json::to_value(sample_log(1).finalize()).unwrap();
        assert!(value.get("start_time").is_some());
        assert!(value.get("game_type").is_some());
        let data = value.get("trajectory_data").unwrap();
        for field in ["ep_observations", "ep_actions", "ep_rewards", "mdp_params"] {
            assert!(data.get(field).is_some(), "missing field {field}");
        }
    }

    #[test]
    fn empty_log_finalizes_to_empty_sequences() {
        let record = sample_log(0).finalize();
        assert!(record.trajectory_data.ep_rewards[0].is_empty());
        assert_eq!(record.game_type, "gridcook");
    }
}

// ── Sinks ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sink_tests {
    use super::*;

    #[test]
    fn memory_sink_shares_its_buffer_across_clones() {
        let sink = MemorySink::new();
        let mut owned = sink.clone();
        owned.submit(&sample_log(2).finalize()).unwrap();
        assert_eq!(sink.submission_count(), 1);
        assert_eq!(sink.records()[0].trajectory_data.ep_rewards[0].len(), 2);
    }

    #[test]
    fn json_file_sink_writes_a_parseable_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = JsonFileSink::new(dir.path());
        let receipt = sink.submit(&sample_log(2).finalize()).unwrap();
        assert!(receipt.destination.ends_with("1700000000.json"));

        let written = std::fs::read_to_string(dir.path().join("1700000000.json")).unwrap();
        let parsed: TrajectoryRecord = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.start_time, 1_700_000_000);
        assert_eq!(parsed.trajectory_data.ep_actions[0].len(), 2);
    }

    #[test]
    fn json_file_sink_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let mut sink = JsonFileSink::new(&nested);
        sink.submit(&sample_log(1).finalize()).unwrap();
        assert!(nested.join("1700000000.json").exists());
    }
}
