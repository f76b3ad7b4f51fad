//! enchantfix - deterministic enchanting-table offer engine
//!
//! Headless demo: runs a scripted preview/commit session against an
//! in-memory host and shows that rebuilding the engine reproduces the
//! same offers and final enchantment sets.

mod config;
mod host_stub;

use std::collections::BTreeMap;

use anyhow::Result;
use config::SimConfig;
use enchantfix_core::{ArmorKind, ArmorMaterial, EnchantmentKind, ItemKind, ToolKind, ToolMaterial};
use enchantfix_engine::{
    EnchantCommitEvent, EnchantEngine, EnchantOffer, PlayerId, PrepareEnchantEvent,
};
use host_stub::{StubStats, StubWorlds};
use tracing::info;

const SHOWCASE_ITEMS: [ItemKind; 4] = [
    ItemKind::Tool(ToolKind::Pickaxe, ToolMaterial::Diamond),
    ItemKind::Tool(ToolKind::Sword, ToolMaterial::Gold),
    ItemKind::Armor(ArmorKind::Boots, ArmorMaterial::Leather),
    ItemKind::Book,
];

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting enchantfix v{}", env!("CARGO_PKG_VERSION"));

    let cfg = SimConfig::load();
    println!("world seed: {}", cfg.world_seed);
    println!("slot costs: {:?}", cfg.slot_costs);
    println!();

    let worlds = StubWorlds {
        seed: Some(cfg.world_seed),
    };

    for player_index in 0..cfg.players {
        let player = PlayerId(0x1000 + player_index as u128);
        let item = SHOWCASE_ITEMS[player_index as usize % SHOWCASE_ITEMS.len()];
        println!("player {player_index} enchants {item:?}");

        let first = run_session(&cfg, &worlds, player, item)?;
        let replay = run_session(&cfg, &worlds, player, item)?;
        anyhow::ensure!(first == replay, "replay diverged; determinism is broken");
        println!("  replay after engine rebuild: identical");
        println!();
    }

    Ok(())
}

/// One preview/commit round with a freshly built engine. Returns the
/// final enchantment set so the caller can compare replays.
fn run_session(
    cfg: &SimConfig,
    worlds: &StubWorlds,
    player: PlayerId,
    item: ItemKind,
) -> Result<BTreeMap<EnchantmentKind, u32>> {
    let mut stats = StubStats::default();
    stats.set_items_enchanted(player, cfg.enchant_count);

    let mut engine = EnchantEngine::new();

    let mut prepare = PrepareEnchantEvent {
        player,
        item,
        offers: cfg.slot_costs.map(|cost| {
            Some(EnchantOffer {
                // Placeholder the host would have proposed.
                enchantment: EnchantmentKind::Unbreaking,
                level: 1,
                cost,
            })
        }),
    };
    engine.prepare_offers(&stats, worlds, &mut prepare)?;

    for (slot, offer) in prepare.offers.iter().enumerate() {
        if let Some(offer) = offer {
            println!(
                "  slot {slot}: {:?} {} (cost {})",
                offer.enchantment, offer.level, offer.cost
            );
        }
    }

    // Commit the most expensive slot, like a player picking the bottom row.
    let slot = 2;
    let mut commit = EnchantCommitEvent {
        player,
        item,
        slot,
        exp_level_cost: cfg.slot_costs[slot],
        enchants_to_add: BTreeMap::new(),
    };
    engine.finalize_enchant(&stats, worlds, &mut commit)?;
    stats.bump(player);

    println!("  committed slot {slot}: {:?}", commit.enchants_to_add);
    Ok(commit.enchants_to_add)
}
