//! Boundary with the hosting game server.
//!
//! The host owns player identity, persistent statistics and worlds;
//! this crate only reads them. Enchanting events are modeled as
//! mutable structs the engine corrects in place, mirroring how the
//! host's own event pipeline hands out proposal/commit data.

use std::collections::BTreeMap;

use enchantfix_core::{EnchantmentKind, ItemKind};
use serde::{Deserialize, Serialize};

/// Opaque player identity (128-bit, UUID-shaped).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlayerId(pub u128);

impl PlayerId {
    /// Low 64 bits of the identity, used for stream seeding.
    pub fn low_bits(self) -> u64 {
        self.0 as u64
    }
}

/// Read-only view of the host's persistent player statistics.
pub trait PlayerStats {
    /// Lifetime count of items this player has enchanted. Monotonic,
    /// host-owned; the engine never writes it.
    fn items_enchanted(&self, player: PlayerId) -> u64;
}

/// Read-only view of the host's world registry.
pub trait WorldRegistry {
    /// Seed of the primary world, or `None` if no world is loaded.
    fn primary_world_seed(&self) -> Option<u64>;
}

/// One of the three offers shown in the enchanting table UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnchantOffer {
    /// Enchantment proposed for this slot.
    pub enchantment: EnchantmentKind,
    /// Level the enchantment is proposed at.
    pub level: u32,
    /// Nominal XP level cost the host computed for this slot.
    pub cost: u32,
}

/// Proposal event: the host computed up to three base costs and asks
/// for the enchantments to display. The engine overwrites
/// `enchantment`/`level` of each populated slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareEnchantEvent {
    /// Player looking at the table.
    pub player: PlayerId,
    /// Item placed in the table.
    pub item: ItemKind,
    /// Offer per slot; `None` where the host proposed nothing.
    pub offers: [Option<EnchantOffer>; 3],
}

/// Commit event: the player spent levels on one slot. The engine
/// replaces `enchants_to_add` with the final enchantment set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnchantCommitEvent {
    /// Player enchanting.
    pub player: PlayerId,
    /// Item being enchanted.
    pub item: ItemKind,
    /// Chosen slot index (0, 1 or 2).
    pub slot: usize,
    /// XP level cost of the chosen slot.
    pub exp_level_cost: u32,
    /// Enchantments the host will apply; overwritten by the engine.
    pub enchants_to_add: BTreeMap<EnchantmentKind, u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use enchantfix_core::{ToolKind, ToolMaterial};

    #[test]
    fn test_player_id_low_bits() {
        let id = PlayerId(0xDEAD_BEEF_0000_0001_u128 << 64 | 0x1234);
        assert_eq!(id.low_bits(), 0x1234);
    }

    #[test]
    fn test_prepare_event_serde_roundtrip() {
        let event = PrepareEnchantEvent {
            player: PlayerId(42),
            item: ItemKind::Tool(ToolKind::Pickaxe, ToolMaterial::Diamond),
            offers: [
                Some(EnchantOffer {
                    enchantment: EnchantmentKind::Efficiency,
                    level: 1,
                    cost: 3,
                }),
                None,
                Some(EnchantOffer {
                    enchantment: EnchantmentKind::Unbreaking,
                    level: 2,
                    cost: 17,
                }),
            ],
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: PrepareEnchantEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.player, event.player);
        assert_eq!(back.offers[0], event.offers[0]);
        assert!(back.offers[1].is_none());
    }
}
