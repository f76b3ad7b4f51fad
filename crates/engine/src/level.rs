//! Modified enchantment level computation.

use enchantfix_core::ItemKind;

use crate::rng::EnchantRolls;

/// Turn a nominal table cost into the randomized "modified enchantment
/// level" used to select which enchantments qualify.
///
/// Consumes exactly two integer draws followed by two float draws; the
/// draw order is contractual, because preview and commit re-derive the
/// same stream and must land on identical values.
pub fn modified_level(rolls: &mut impl EnchantRolls, item: ItemKind, nominal_cost: u32) -> u32 {
    let enchantability = item.base_enchantability();
    let half = enchantability / 2;

    // Triangular bonus centered at 1 + half/2.
    let bound = half / 2 + 1;
    let bonus = 1 + rolls.roll_int(bound) + rolls.roll_int(bound);
    let k = nominal_cost + bonus;

    // Multiplicative jitter, mean 1.0, range [0.85, 1.15].
    let jitter = 1.0 + (rolls.roll_unit() + rolls.roll_unit() - 1.0) * 0.15;

    let level = (k as f32 * jitter).round() as u32;
    level.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRolls;
    use enchantfix_core::{ToolKind, ToolMaterial};

    const DIAMOND_PICKAXE: ItemKind = ItemKind::Tool(ToolKind::Pickaxe, ToolMaterial::Diamond);

    #[test]
    fn test_scripted_rolls_give_level_four() {
        // Enchantability 10 => half 5 => draw bound 3. Int draws 1 + 1
        // give bonus 3; float draws 0.5 + 0.5 give jitter 1.0.
        let mut rolls = ScriptedRolls::new(&[1, 1], &[0.5, 0.5]);
        assert_eq!(modified_level(&mut rolls, DIAMOND_PICKAXE, 1), 4);
    }

    #[test]
    fn test_low_jitter_clamps_to_one() {
        // k = 1 + (1 + 0 + 0) = 2; jitter 0.85 => round(1.7) = 2.
        let mut rolls = ScriptedRolls::new(&[0, 0], &[0.0, 0.0]);
        assert_eq!(modified_level(&mut rolls, DIAMOND_PICKAXE, 1), 2);

        // Degenerate cost 0 still yields at least level 1.
        let mut rolls = ScriptedRolls::new(&[0, 0], &[0.0, 0.0]);
        assert_eq!(modified_level(&mut rolls, DIAMOND_PICKAXE, 0), 1);
    }

    #[test]
    fn test_high_jitter_rounds_up() {
        // k = 30 + 3 = 33; jitter 1.15 (draws just below 1.0) ~= 37.95.
        let mut rolls = ScriptedRolls::new(&[1, 1], &[1.0 - f32::EPSILON, 1.0 - f32::EPSILON]);
        let level = modified_level(&mut rolls, DIAMOND_PICKAXE, 30);
        assert!((37..=38).contains(&level), "got {level}");
    }

    #[test]
    fn test_book_bound_is_one() {
        // Enchantability 1 => half 0 => both int draws come from 0..1,
        // so the bonus is always exactly 1.
        let mut rolls = ScriptedRolls::new(&[0, 0], &[0.5, 0.5]);
        assert_eq!(modified_level(&mut rolls, ItemKind::Book, 6), 7);
    }
}
