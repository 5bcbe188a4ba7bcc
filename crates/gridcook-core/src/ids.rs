//! Strongly typed agent-slot identifier.

use std::fmt;

/// Index of one controllable participant (human or NPC) in the joint action.
///
/// Stored as `u8` — an episode has a handful of slots at most, and the
/// compact width keeps the joint-action encoding small.  The inner integer
/// is `pub` for direct indexing via `slot.index()`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SlotId(pub u8);

impl SlotId {
    /// Sentinel meaning "no valid slot".
    pub const INVALID: SlotId = SlotId(u8::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for SlotId {
    /// Returns the `INVALID` sentinel so uninitialized slots are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot{}", self.0)
    }
}

impl From<SlotId> for usize {
    #[inline(always)]
    fn from(slot: SlotId) -> usize {
        slot.0 as usize
    }
}

impl TryFrom<usize> for SlotId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<SlotId, Self::Error> {
        u8::try_from(n).map(SlotId)
    }
}
