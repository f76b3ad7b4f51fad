//! In-memory stand-in for the host game server, used by the demo.

use std::collections::HashMap;

use enchantfix_engine::{PlayerId, PlayerStats, WorldRegistry};

/// Player statistics store with explicit per-player counters.
#[derive(Debug, Default)]
pub struct StubStats {
    counts: HashMap<PlayerId, u64>,
}

impl StubStats {
    pub fn set_items_enchanted(&mut self, player: PlayerId, count: u64) {
        self.counts.insert(player, count);
    }

    /// What the host would do after a successful enchant.
    pub fn bump(&mut self, player: PlayerId) {
        *self.counts.entry(player).or_insert(0) += 1;
    }
}

impl PlayerStats for StubStats {
    fn items_enchanted(&self, player: PlayerId) -> u64 {
        self.counts.get(&player).copied().unwrap_or(0)
    }
}

/// World registry holding a single primary world seed.
#[derive(Debug, Clone, Copy)]
pub struct StubWorlds {
    pub seed: Option<u64>,
}

impl WorldRegistry for StubWorlds {
    fn primary_world_seed(&self) -> Option<u64> {
        self.seed
    }
}
