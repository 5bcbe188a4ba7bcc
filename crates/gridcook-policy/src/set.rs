//! Per-slot policy registry.

use std::collections::BTreeMap;

use gridcook_core::SlotId;

use crate::{CyclePolicy, Policy};

/// Maps agent slots to boxed policies.
///
/// Backed by a `BTreeMap`, so iteration is always in ascending slot order —
/// that ordering is the determinism guarantee for joint-action assembly.
/// Keys are normally exactly the non-human slots, but a policy registered
/// for the human slot is legal (agent-vs-agent configurations) and takes
/// precedence over buffered keyboard input.
pub struct PolicySet<S> {
    policies: BTreeMap<SlotId, Box<dyn Policy<S>>>,
}

impl<S> PolicySet<S> {
    /// An empty mapping.
    pub fn new() -> Self {
        PolicySet {
            policies: BTreeMap::new(),
        }
    }

    /// The default mapping used when none is supplied: a [`CyclePolicy`]
    /// for every slot except `human_slot`.
    pub fn fallback(num_slots: usize, human_slot: SlotId) -> Self
    where
        S: 'static,
    {
        let mut set = PolicySet::new();
        for i in 0..num_slots {
            let slot = SlotId(i as u8);
            if slot != human_slot {
                set.insert(slot, Box::new(CyclePolicy::default()));
            }
        }
        set
    }

    /// Register `policy` for `slot`, replacing any existing entry.
    pub fn insert(&mut self, slot: SlotId, policy: Box<dyn Policy<S>>) {
        self.policies.insert(slot, policy);
    }

    /// Fluent variant of [`insert`][Self::insert].
    pub fn with(mut self, slot: SlotId, policy: Box<dyn Policy<S>>) -> Self {
        self.insert(slot, policy);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Registered slots in ascending order.
    pub fn slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.policies.keys().copied()
    }

    /// Highest registered slot, for bounds validation.
    pub fn max_slot(&self) -> Option<SlotId> {
        self.policies.keys().next_back().copied()
    }

    /// Mutable iteration in ascending slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlotId, &mut Box<dyn Policy<S>>)> + '_ {
        self.policies.iter_mut().map(|(&slot, p)| (slot, p))
    }
}

impl<S> Default for PolicySet<S> {
    fn default() -> Self {
        Self::new()
    }
}
