//! Offer engine: the two-phase preview/commit protocol.
//!
//! Preview corrects the host's three proposed offers; commit rebuilds
//! the winning offer from the same derived stream and chains bonus
//! enchantments. Nothing computed at preview time is persisted: commit
//! re-derives every draw, which is what makes the protocol survive
//! server restarts between the two phases.

use std::collections::{BTreeMap, HashMap};

use enchantfix_core::{EnchantmentKind, ItemKind};

use crate::eligibility::{candidates_at, Candidate};
use crate::error::EnchantError;
use crate::host::{
    EnchantCommitEvent, EnchantOffer, PlayerId, PlayerStats, PrepareEnchantEvent, WorldRegistry,
};
use crate::level::modified_level;
use crate::rng::{stream_for, EnchantRolls};
use crate::selector::pick_weighted;

/// Recorded when a preview was issued and not yet committed.
///
/// Pure consistency guard: commit never reads offer data out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingActivation {
    /// Item the preview was computed for.
    pub item: ItemKind,
}

/// Per-player `Idle -> Previewed -> Idle` state machine. A player
/// absent from the table is `Idle`; a recorded activation is the
/// `Previewed` state.
#[derive(Debug, Default)]
struct ActivationTracker {
    previewed: HashMap<PlayerId, PendingActivation>,
}

impl ActivationTracker {
    /// `Idle -> Previewed` (re-previewing just refreshes the record).
    fn record_preview(&mut self, player: PlayerId, item: ItemKind) {
        self.previewed.insert(player, PendingActivation { item });
    }

    /// `Previewed -> Idle`; `None` when the player was never previewed.
    fn take(&mut self, player: PlayerId) -> Option<PendingActivation> {
        self.previewed.remove(&player)
    }

    fn is_previewed(&self, player: PlayerId) -> bool {
        self.previewed.contains_key(&player)
    }
}

/// Primary pick plus the residual weighted pool bonus enchantments are
/// drawn from.
struct PrimaryPick {
    enchantment: EnchantmentKind,
    level: u32,
    remaining: Vec<Candidate>,
}

/// Recomputes the enchantment offers a server proposes and finally
/// grants, replacing the host's own buggy selection.
///
/// Synchronous and single-threaded; the only mutable state is the
/// per-player activation guard.
#[derive(Debug, Default)]
pub struct EnchantEngine {
    activations: ActivationTracker,
}

impl EnchantEngine {
    /// Create an engine with no pending activations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `player` has an uncommitted preview.
    pub fn has_pending(&self, player: PlayerId) -> bool {
        self.activations.is_previewed(player)
    }

    /// Preview phase: overwrite each populated slot of the host's
    /// proposal with our own enchantment and level.
    ///
    /// On [`EnchantError::TableGap`] the current and remaining slots
    /// are left uncorrected, signaling the gap upstream; earlier slots
    /// keep their corrections.
    pub fn prepare_offers(
        &mut self,
        stats: &impl PlayerStats,
        worlds: &impl WorldRegistry,
        event: &mut PrepareEnchantEvent,
    ) -> Result<(), EnchantError> {
        if event.offers.iter().all(Option::is_none) {
            // The host proposed nothing; neither do we.
            return Ok(());
        }

        let world_seed = worlds.primary_world_seed().unwrap_or(0);
        let enchant_count = stats.items_enchanted(event.player);

        // The player is Previewed from the first stream derivation on,
        // so a commit that follows a gapped preview fails on the gap,
        // not on a missing activation.
        self.activations.record_preview(event.player, event.item);

        for slot in 0..event.offers.len() {
            let Some(offer) = event.offers[slot] else {
                continue;
            };
            let mut stream = stream_for(event.player, world_seed, enchant_count, slot);
            let level = modified_level(&mut stream, event.item, offer.cost);
            let primary = match pick_primary(&mut stream, event.item, level) {
                Ok(primary) => primary,
                Err(err) => {
                    tracing::warn!(
                        player = ?event.player,
                        item = ?event.item,
                        slot,
                        %err,
                        "leaving host offers uncorrected"
                    );
                    return Err(err);
                }
            };
            event.offers[slot] = Some(EnchantOffer {
                enchantment: primary.enchantment,
                level: primary.level,
                cost: offer.cost,
            });
        }
        Ok(())
    }

    /// Commit phase: replace the host's to-be-applied enchantment map
    /// with the primary pick plus chained bonus enchantments.
    ///
    /// Requires a pending preview for the player; the activation is
    /// cleared on every exit path, so the next commit needs a fresh
    /// preview.
    pub fn finalize_enchant(
        &mut self,
        stats: &impl PlayerStats,
        worlds: &impl WorldRegistry,
        event: &mut EnchantCommitEvent,
    ) -> Result<(), EnchantError> {
        let Some(pending) = self.activations.take(event.player) else {
            let err = EnchantError::MissingPendingActivation {
                player: event.player,
            };
            tracing::error!(player = ?event.player, "enchant committed without a preview");
            return Err(err);
        };
        if pending.item != event.item {
            tracing::warn!(
                player = ?event.player,
                previewed = ?pending.item,
                committed = ?event.item,
                "committed item differs from previewed item"
            );
        }

        let world_seed = worlds.primary_world_seed().unwrap_or(0);
        let enchant_count = stats.items_enchanted(event.player);

        // Same derivation as preview: the stream is a pure function of
        // its inputs, so the draws land on identical values.
        let mut stream = stream_for(event.player, world_seed, enchant_count, event.slot);
        let level = modified_level(&mut stream, event.item, event.exp_level_cost);
        let primary = match pick_primary(&mut stream, event.item, level) {
            Ok(primary) => primary,
            Err(err) => {
                tracing::warn!(player = ?event.player, item = ?event.item, %err, "commit aborted");
                return Err(err);
            }
        };

        event.enchants_to_add.clear();
        event
            .enchants_to_add
            .insert(primary.enchantment, primary.level);
        chain_bonus(&mut stream, level, primary.remaining, &mut event.enchants_to_add);
        Ok(())
    }
}

/// Build the primary offer for an item at a modified level: enumerate
/// candidates and pick one by weight. Consumes exactly one integer draw.
fn pick_primary(
    rolls: &mut impl EnchantRolls,
    item: ItemKind,
    modified_level: u32,
) -> Result<PrimaryPick, EnchantError> {
    let candidates = candidates_at(item, modified_level);
    if candidates.is_empty() {
        return Err(EnchantError::TableGap {
            item,
            modified_level,
        });
    }
    let Some(enchantment) = pick_weighted(rolls, &candidates) else {
        return Err(EnchantError::SelectorExhausted);
    };
    let level = candidates
        .iter()
        .find(|(kind, _)| *kind == enchantment)
        .map(|(_, level)| *level)
        .unwrap_or(1);

    let remaining = candidates
        .into_iter()
        .filter(|(kind, _)| *kind != enchantment)
        .collect();
    Ok(PrimaryPick {
        enchantment,
        level,
        remaining,
    })
}

/// Bonus-enchantment chaining: each successful roll halves the budget
/// for the next one, and the pool is re-pruned for conflicts against
/// everything chosen so far before every draw.
fn chain_bonus(
    rolls: &mut impl EnchantRolls,
    mut budget: u32,
    mut pool: Vec<Candidate>,
    chosen: &mut BTreeMap<EnchantmentKind, u32>,
) {
    loop {
        let roll = rolls.roll_int(50);
        if roll > budget {
            break;
        }
        pool.retain(|(kind, _)| !chosen.keys().any(|have| kind.conflicts_with(*have)));
        if pool.is_empty() {
            break;
        }
        let Some(extra) = pick_weighted(rolls, &pool) else {
            tracing::error!("weighted selector exhausted a non-empty bonus pool");
            break;
        };
        let level = pool
            .iter()
            .find(|(kind, _)| *kind == extra)
            .map(|(_, level)| *level)
            .unwrap_or(1);
        chosen.insert(extra, level);
        pool.retain(|(kind, _)| *kind != extra);
        budget /= 2;
    }
}
