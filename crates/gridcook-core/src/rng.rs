//! Deterministic RNG for stochastic scripted policies.
//!
//! Each stochastic policy owns its own `SessionRng`, seeded from the
//! episode seed and the slot it drives, so one slot's decisions never
//! perturb another slot's stream and a fixed seed reproduces an episode's
//! NPC behavior exactly.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::SlotId;

/// 64-bit fractional golden-ratio constant for seed mixing — spreads
/// consecutive slot indices uniformly across the seed space.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded `SmallRng` wrapper.
pub struct SessionRng(SmallRng);

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        SessionRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent stream for `slot` from the episode seed.
    pub fn for_slot(seed: u64, slot: SlotId) -> Self {
        let mixed = seed ^ (slot.0 as u64).wrapping_mul(MIXING_CONSTANT);
        SessionRng(SmallRng::seed_from_u64(mixed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        use rand::Rng;
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice; `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
