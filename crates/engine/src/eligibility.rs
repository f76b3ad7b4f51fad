//! Candidate enumeration for a given item and modified level.

use enchantfix_core::{EnchantmentKind, ItemKind};

/// A candidate enchantment with the level it would be applied at.
pub type Candidate = (EnchantmentKind, u32);

/// Every non-treasure enchantment legal on `item`, in canonical
/// enumeration order. Books accept everything.
pub fn eligible(item: ItemKind) -> Vec<EnchantmentKind> {
    EnchantmentKind::ALL
        .into_iter()
        .filter(|kind| !kind.is_treasure())
        .filter(|kind| kind.applies_to(item) || item == ItemKind::Book)
        .collect()
}

/// Candidates that qualify at `modified_level`, with the highest level
/// whose cost window contains it.
///
/// The returned order follows [`eligible`]; it matters for
/// deterministic iteration in the weighted selector, not for the
/// selection probabilities themselves.
pub fn candidates_at(item: ItemKind, modified_level: u32) -> Vec<Candidate> {
    eligible(item)
        .into_iter()
        .filter_map(|kind| {
            qualifying_level(kind, modified_level).map(|level| (kind, level))
        })
        .collect()
}

/// Highest level in `[1, max_level]` whose window contains
/// `modified_level`, scanning downwards. `None` if no level qualifies.
fn qualifying_level(kind: EnchantmentKind, modified_level: u32) -> Option<u32> {
    let curve = kind.cost_curve();
    (1..=kind.max_level())
        .rev()
        .find(|&level| curve.accepts(level, modified_level))
}
