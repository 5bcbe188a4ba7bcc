//! The closed action alphabet and the per-tick joint action.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SlotId;

// ── Action ────────────────────────────────────────────────────────────────────

/// One agent action — the only alphabet agents may emit.
///
/// `Stay` is the neutral element every slot is reset to at the start of a
/// tick.  The five remaining members are the key-drivable subset: a key
/// binding may target any of them, but never `Stay` (a silent tick already
/// means "stay").
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Stay,
    North,
    South,
    East,
    West,
    Interact,
}

impl Action {
    /// Every member of the alphabet, `Stay` first.
    pub const ALL: [Action; 6] = [
        Action::Stay,
        Action::North,
        Action::South,
        Action::East,
        Action::West,
        Action::Interact,
    ];

    /// The five members a key binding may target (everything but `Stay`).
    pub const DRIVABLE: [Action; 5] = [
        Action::North,
        Action::South,
        Action::East,
        Action::West,
        Action::Interact,
    ];

    /// Stable lowercase name used in serialized trajectories.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Stay => "stay",
            Action::North => "north",
            Action::South => "south",
            Action::East => "east",
            Action::West => "west",
            Action::Interact => "interact",
        }
    }

    /// Compact encoding used by the one-shot input latch.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Action::Stay => 0,
            Action::North => 1,
            Action::South => 2,
            Action::East => 3,
            Action::West => 4,
            Action::Interact => 5,
        }
    }

    /// Inverse of [`code`][Self::code]; `None` for out-of-alphabet values.
    #[inline]
    pub fn from_code(code: u8) -> Option<Action> {
        Action::ALL.get(code as usize).copied()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── JointAction ───────────────────────────────────────────────────────────────

/// The ordered tuple of one action per agent slot, consumed atomically by
/// the stepper each tick.
///
/// Constructed neutral (all-`Stay`) at a fixed length equal to the slot
/// count; the length never changes afterwards.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct JointAction(Vec<Action>);

impl JointAction {
    /// All-`Stay` joint action for `num_slots` agent slots.
    pub fn neutral(num_slots: usize) -> Self {
        JointAction(vec![Action::Stay; num_slots])
    }

    /// Number of agent slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Write `action` into `slot`.  Slots are validated at session
    /// construction, so an out-of-range index here is a logic bug.
    #[inline]
    pub fn set(&mut self, slot: SlotId, action: Action) {
        self.0[slot.index()] = action;
    }

    #[inline]
    pub fn get(&self, slot: SlotId) -> Option<Action> {
        self.0.get(slot.index()).copied()
    }

    /// The per-slot actions in slot order.
    pub fn actions(&self) -> &[Action] {
        &self.0
    }
}

impl fmt::Display for JointAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, a) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            f.write_str(a.as_str())?;
        }
        write!(f, "]")
    }
}
