//! Unit tests for gridcook-policy.

use gridcook_core::{Action, SlotId, Tick};

use crate::{CyclePolicy, Policy, PolicySet, RandomPolicy, SessionView, StayPolicy};

/// A view over a unit state — these policies ignore the state anyway.
fn view(slot: SlotId) -> SessionView<'static, ()> {
    SessionView {
        state: &(),
        tick: Tick::ZERO,
        slot,
        time_left_secs: 60,
        score: 0.0,
    }
}

fn drive<P: Policy<()>>(policy: &mut P, n: usize) -> Vec<Action> {
    (0..n).map(|_| policy.decide(&view(SlotId(1))).unwrap()).collect()
}

// ── CyclePolicy ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod cycle_tests {
    use super::*;

    #[test]
    fn holds_each_action_for_repeat_ticks() {
        let mut policy = CyclePolicy::new(vec![Action::North, Action::East], 2);
        assert_eq!(
            drive(&mut policy, 6),
            vec![
                Action::North,
                Action::North,
                Action::East,
                Action::East,
                Action::North,
                Action::North,
            ]
        );
    }

    #[test]
    fn zero_repeat_behaves_as_one() {
        let mut policy = CyclePolicy::new(vec![Action::North, Action::South], 0);
        assert_eq!(
            drive(&mut policy, 4),
            vec![Action::North, Action::South, Action::North, Action::South]
        );
    }

    #[test]
    fn default_cycle_tours_the_cardinals() {
        let mut policy = CyclePolicy::default();
        let actions = drive(&mut policy, 8);
        assert_eq!(
            actions,
            vec![
                Action::North,
                Action::North,
                Action::East,
                Action::East,
                Action::South,
                Action::South,
                Action::West,
                Action::West,
            ]
        );
    }

    #[test]
    fn empty_sequence_stays() {
        let mut policy = CyclePolicy::new(vec![], 3);
        assert_eq!(drive(&mut policy, 2), vec![Action::Stay, Action::Stay]);
    }
}

// ── StayPolicy / RandomPolicy ─────────────────────────────────────────────────

#[cfg(test)]
mod scripted_tests {
    use super::*;

    #[test]
    fn stay_policy_never_acts() {
        let mut policy = StayPolicy;
        assert_eq!(drive(&mut policy, 3), vec![Action::Stay; 3]);
    }

    #[test]
    fn random_policy_emits_alphabet_members() {
        let mut policy = RandomPolicy::new(42, SlotId(1));
        for action in drive(&mut policy, 32) {
            assert!(Action::ALL.contains(&action));
        }
    }

    #[test]
    fn random_policy_is_seed_deterministic() {
        let mut a = RandomPolicy::new(42, SlotId(1));
        let mut b = RandomPolicy::new(42, SlotId(1));
        assert_eq!(drive(&mut a, 16), drive(&mut b, 16));
    }
}

// ── PolicySet ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod set_tests {
    use super::*;

    #[test]
    fn fallback_covers_exactly_the_npc_slots() {
        let set: PolicySet<()> = PolicySet::fallback(3, SlotId(1));
        let slots: Vec<SlotId> = set.slots().collect();
        assert_eq!(slots, vec![SlotId(0), SlotId(2)]);
    }

    #[test]
    fn iteration_is_ascending_slot_order() {
        let mut set: PolicySet<()> = PolicySet::new()
            .with(SlotId(2), Box::new(StayPolicy))
            .with(SlotId(0), Box::new(StayPolicy))
            .with(SlotId(1), Box::new(StayPolicy));
        let order: Vec<SlotId> = set.iter_mut().map(|(slot, _)| slot).collect();
        assert_eq!(order, vec![SlotId(0), SlotId(1), SlotId(2)]);
        assert_eq!(set.max_slot(), Some(SlotId(2)));
    }

    #[test]
    fn human_slot_overlap_is_allowed() {
        let mut set: PolicySet<()> = PolicySet::fallback(2, SlotId(0));
        set.insert(SlotId(0), Box::new(StayPolicy));
        assert_eq!(set.len(), 2);
    }
}
