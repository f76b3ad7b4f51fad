//! Deterministic per-player random streams.
//!
//! Offers must be reproducible between the preview and commit phases
//! and across server restarts, so no RNG state is ever stored: each
//! stream is a pure function of (player, world seed, lifetime enchant
//! count, slot). Reconstructing with identical inputs yields a
//! byte-identical draw sequence.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::host::PlayerId;

/// Uniform draws consumed by the selection algorithm.
///
/// The engine only ever needs bounded integers and unit-interval
/// floats; keeping that surface behind a trait lets tests script exact
/// draw sequences.
pub trait EnchantRolls {
    /// Uniform integer in `0..bound`. `bound` must be at least 1.
    fn roll_int(&mut self, bound: u32) -> u32;
    /// Uniform float in `[0, 1)`.
    fn roll_unit(&mut self) -> f32;
}

impl EnchantRolls for StdRng {
    fn roll_int(&mut self, bound: u32) -> u32 {
        self.gen_range(0..bound)
    }

    fn roll_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Derive the reproducible stream for one enchanting slot.
///
/// The base generator is seeded from the player's identity bits, the
/// world seed and the lifetime enchant counter; one raw value is drawn
/// per slot index and the last one reseeds a fresh generator, giving
/// each of the three table slots an independent sub-stream.
pub fn stream_for(player: PlayerId, world_seed: u64, enchant_count: u64, slot: usize) -> StdRng {
    let base_seed = (player.low_bits() | world_seed).wrapping_add(enchant_count);
    let mut base = StdRng::seed_from_u64(base_seed);

    let mut slot_seed = base.gen::<u64>();
    for _ in 0..slot {
        slot_seed = base.gen::<u64>();
    }
    StdRng::seed_from_u64(slot_seed)
}

/// Scripted draw sequence for tests.
#[cfg(test)]
pub(crate) struct ScriptedRolls {
    pub ints: std::collections::VecDeque<u32>,
    pub units: std::collections::VecDeque<f32>,
}

#[cfg(test)]
impl ScriptedRolls {
    pub fn new(ints: &[u32], units: &[f32]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            units: units.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl EnchantRolls for ScriptedRolls {
    fn roll_int(&mut self, bound: u32) -> u32 {
        let value = self.ints.pop_front().expect("script ran out of int draws");
        assert!(value < bound, "scripted draw {value} out of bound {bound}");
        value
    }

    fn roll_unit(&mut self) -> f32 {
        self.units
            .pop_front()
            .expect("script ran out of unit draws")
    }
}
