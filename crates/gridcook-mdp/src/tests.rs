//! Unit tests for gridcook-mdp.

use gridcook_core::{Action, JointAction, MdpParams, SlotId};

use crate::{StepError, Stepper, ToyKitchen};

fn params() -> MdpParams {
    MdpParams {
        cook_time_ticks: 2,
        initial_orders: vec!["onion_soup".into()],
        default_serve: "tomato_soup".into(),
        delivery_reward: 20.0,
        ..Default::default()
    }
}

fn kitchen() -> ToyKitchen {
    ToyKitchen::new(2, &params())
}

fn joint(a0: Action, a1: Action) -> JointAction {
    let mut j = JointAction::neutral(2);
    j.set(SlotId(0), a0);
    j.set(SlotId(1), a1);
    j
}

#[cfg(test)]
mod start_state_tests {
    use super::*;

    #[test]
    fn start_state_carries_order_queue() {
        let state = kitchen().start_state(&["a".into(), "b".into()]).unwrap();
        assert_eq!(state.prep, vec![0, 0]);
        assert_eq!(state.pending_orders, vec!["a", "b"]);
        assert_eq!(state.served, 0);
        assert!(state.last_served.is_none());
    }
}

#[cfg(test)]
mod transition_tests {
    use super::*;

    #[test]
    fn north_and_south_move_prep() {
        let k = kitchen();
        let s0 = k.start_state(&[]).unwrap();
        let s1 = k.transition(&s0, &joint(Action::North, Action::Stay)).unwrap().next_state;
        assert_eq!(s1.prep, vec![1, 0]);
        let s2 = k.transition(&s1, &joint(Action::South, Action::South)).unwrap().next_state;
        // Slot 1 discard floors at zero.
        assert_eq!(s2.prep, vec![0, 0]);
    }

    #[test]
    fn interact_below_cook_time_is_a_no_op() {
        let k = kitchen();
        let s0 = k.start_state(&["a".into()]).unwrap();
        let out = k.transition(&s0, &joint(Action::Interact, Action::Stay)).unwrap();
        assert_eq!(out.reward, 0.0);
        assert_eq!(out.next_state.served, 0);
        assert_eq!(out.next_state.pending_orders, vec!["a"]);
    }

    #[test]
    fn cooked_interact_serves_next_order() {
        let k = kitchen();
        let mut state = k.start_state(&["a".into(), "b".into()]).unwrap();
        for _ in 0..2 {
            state = k.transition(&state, &joint(Action::North, Action::Stay)).unwrap().next_state;
        }
        let out = k.transition(&state, &joint(Action::Interact, Action::Stay)).unwrap();
        assert_eq!(out.reward, 20.0);
        assert_eq!(out.next_state.prep[0], 0);
        assert_eq!(out.next_state.pending_orders, vec!["b"]);
        assert_eq!(out.next_state.served, 1);
        assert_eq!(out.next_state.last_served.as_deref(), Some("a"));
    }

    #[test]
    fn drained_queue_serves_the_default_dish() {
        let k = kitchen();
        let mut state = k.start_state(&[]).unwrap();
        for _ in 0..2 {
            state = k.transition(&state, &joint(Action::North, Action::Stay)).unwrap().next_state;
        }
        let out = k.transition(&state, &joint(Action::Interact, Action::Stay)).unwrap();
        assert_eq!(out.reward, 20.0);
        assert_eq!(out.next_state.last_served.as_deref(), Some("tomato_soup"));
    }

    #[test]
    fn probability_is_always_unity() {
        let k = kitchen();
        let s0 = k.start_state(&[]).unwrap();
        let out = k.transition(&s0, &joint(Action::East, Action::West)).unwrap();
        assert_eq!(out.probability, 1.0);
    }

    #[test]
    fn previous_state_is_never_mutated() {
        let k = kitchen();
        let s0 = k.start_state(&["a".into()]).unwrap();
        let snapshot = s0.clone();
        let _ = k.transition(&s0, &joint(Action::North, Action::North)).unwrap();
        assert_eq!(s0, snapshot);
    }

    #[test]
    fn joint_arity_mismatch_errors() {
        let k = kitchen();
        let s0 = k.start_state(&[]).unwrap();
        let bad = JointAction::neutral(3);
        let result = k.transition(&s0, &bad);
        assert!(matches!(result, Err(StepError::JointArity { expected: 2, got: 3 })));
    }
}
