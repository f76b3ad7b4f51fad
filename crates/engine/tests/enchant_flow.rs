//! End-to-end preview/commit validation.
//!
//! Focus areas:
//! - Restart-proof determinism of the two-phase protocol
//! - Conflict enforcement in committed enchantment sets
//! - Applicability of every granted enchantment

use std::collections::BTreeMap;

use enchantfix_core::{ArmorKind, ArmorMaterial, EnchantmentKind, ItemKind, ToolKind, ToolMaterial};
use enchantfix_engine::{
    EnchantCommitEvent, EnchantEngine, EnchantOffer, PlayerId, PlayerStats, PrepareEnchantEvent,
    WorldRegistry,
};

struct Stats(u64);
impl PlayerStats for Stats {
    fn items_enchanted(&self, _player: PlayerId) -> u64 {
        self.0
    }
}

struct Worlds(Option<u64>);
impl WorldRegistry for Worlds {
    fn primary_world_seed(&self) -> Option<u64> {
        self.0
    }
}

fn preview(player: PlayerId, item: ItemKind, costs: [u32; 3]) -> PrepareEnchantEvent {
    PrepareEnchantEvent {
        player,
        item,
        offers: costs.map(|cost| {
            Some(EnchantOffer {
                enchantment: EnchantmentKind::Unbreaking,
                level: 1,
                cost,
            })
        }),
    }
}

fn commit(player: PlayerId, item: ItemKind, slot: usize, cost: u32) -> EnchantCommitEvent {
    EnchantCommitEvent {
        player,
        item,
        slot,
        exp_level_cost: cost,
        enchants_to_add: BTreeMap::new(),
    }
}

/// Run one full session (preview then commit on `slot`) and return the
/// final enchantment set.
fn run_session(
    world_seed: u64,
    enchant_count: u64,
    player: PlayerId,
    item: ItemKind,
    slot: usize,
) -> BTreeMap<EnchantmentKind, u32> {
    let stats = Stats(enchant_count);
    let worlds = Worlds(Some(world_seed));
    let mut engine = EnchantEngine::new();

    let costs = [2, 9, 17];
    let mut prepare = preview(player, item, costs);
    engine
        .prepare_offers(&stats, &worlds, &mut prepare)
        .expect("preview must succeed for enchantable items");

    let mut commit = commit(player, item, slot, costs[slot]);
    engine
        .finalize_enchant(&stats, &worlds, &mut commit)
        .expect("commit after preview must succeed");
    commit.enchants_to_add
}

#[test]
fn sessions_are_restart_proof() {
    let player = PlayerId(0xFACE_0000_0000_0001);
    let item = ItemKind::Tool(ToolKind::Sword, ToolMaterial::Diamond);

    for slot in 0..3 {
        let first = run_session(987654321, 12, player, item, slot);
        // Fresh engine instance, as rebuilt after a server restart.
        let second = run_session(987654321, 12, player, item, slot);
        assert_eq!(first, second, "slot {slot} diverged across restarts");
    }
}

#[test]
fn distinct_players_get_distinct_sessions() {
    let item = ItemKind::Tool(ToolKind::Pickaxe, ToolMaterial::Gold);
    let results: Vec<_> = (0u128..24)
        .map(|n| run_session(42, 0, PlayerId(n * 7919 + 1), item, 2))
        .collect();

    // Not a hard guarantee per pair, but across 24 players the streams
    // must not all collapse onto one outcome.
    let first = &results[0];
    assert!(results.iter().any(|r| r != first));
}

#[test]
fn committed_sets_never_conflict() {
    let items = [
        ItemKind::Tool(ToolKind::Sword, ToolMaterial::Gold),
        ItemKind::Tool(ToolKind::Pickaxe, ToolMaterial::Wood),
        ItemKind::Armor(ArmorKind::Chestplate, ArmorMaterial::Gold),
        ItemKind::Armor(ArmorKind::Boots, ArmorMaterial::Leather),
        ItemKind::Book,
    ];

    for (i, item) in items.iter().enumerate() {
        for count in 0..40 {
            let player = PlayerId(1000 + i as u128);
            let set = run_session(31337, count, player, *item, 2);
            assert!(!set.is_empty());

            let kinds: Vec<_> = set.keys().copied().collect();
            for a in &kinds {
                for b in &kinds {
                    assert!(
                        !a.conflicts_with(*b),
                        "conflicting pair {a:?}/{b:?} granted on {item:?} (count {count})"
                    );
                }
            }
        }
    }
}

#[test]
fn committed_enchantments_fit_the_item() {
    let item = ItemKind::Armor(ArmorKind::Helmet, ArmorMaterial::Gold);
    for count in 0..60 {
        let set = run_session(7, count, PlayerId(3), item, 1);
        for (kind, level) in &set {
            assert!(
                kind.applies_to(item),
                "{kind:?} granted on a helmet it does not apply to"
            );
            assert!(!kind.is_treasure());
            assert!(*level >= 1 && *level <= kind.max_level());
        }
    }
}

#[test]
fn preview_primary_reappears_at_commit() {
    let stats = Stats(5);
    let worlds = Worlds(Some(2024));
    let player = PlayerId(0xBEEF);
    let item = ItemKind::Bow;

    let mut engine = EnchantEngine::new();
    let mut prepare = preview(player, item, [3, 12, 24]);
    engine.prepare_offers(&stats, &worlds, &mut prepare).unwrap();

    for slot in 0..3 {
        let shown = prepare.offers[slot].unwrap();
        // Re-preview so each commit has an activation on record.
        let mut again = preview(player, item, [3, 12, 24]);
        engine.prepare_offers(&stats, &worlds, &mut again).unwrap();

        let mut commit = commit(player, item, slot, shown.cost);
        engine.finalize_enchant(&stats, &worlds, &mut commit).unwrap();
        assert_eq!(
            commit.enchants_to_add.get(&shown.enchantment),
            Some(&shown.level),
            "slot {slot}: committed set lost the previewed primary"
        );
    }
}
