//! Weighted random selection over a candidate pool.

use enchantfix_core::EnchantmentKind;

use crate::eligibility::Candidate;
use crate::rng::EnchantRolls;

/// Sum of selection weights over the pool.
pub fn total_weight(candidates: &[Candidate]) -> u32 {
    candidates.iter().map(|(kind, _)| kind.weight()).sum()
}

/// Pick one candidate proportionally to its weight.
///
/// Draws a single integer in `0..total` and walks the pool in stored
/// order, subtracting each weight until the draw goes negative.
/// Returns `None` only for an empty pool; every weight in the tables
/// is at least 1, so a zero total on a non-empty pool is a table
/// defect, not a runtime condition.
pub fn pick_weighted(
    rolls: &mut impl EnchantRolls,
    candidates: &[Candidate],
) -> Option<EnchantmentKind> {
    let total = total_weight(candidates);
    if total == 0 {
        return None;
    }

    let mut w = rolls.roll_int(total) as i64;
    for (kind, _) in candidates {
        w -= kind.weight() as i64;
        if w < 0 {
            return Some(*kind);
        }
    }
    // Unreachable: the subtraction walk always terminates inside the pool.
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRolls;

    #[test]
    fn test_single_candidate_always_selected() {
        // Sharpness has weight 10; every draw in 0..10 lands on it.
        let pool = vec![(EnchantmentKind::Sharpness, 3)];
        for draw in 0..10 {
            let mut rolls = ScriptedRolls::new(&[draw], &[]);
            assert_eq!(
                pick_weighted(&mut rolls, &pool),
                Some(EnchantmentKind::Sharpness)
            );
        }
    }

    #[test]
    fn test_draw_partitions_by_weight() {
        // Sharpness (10) then Thorns (1): draws 0..=9 select the
        // first entry, draw 10 falls through to the second.
        let pool = vec![(EnchantmentKind::Sharpness, 1), (EnchantmentKind::Thorns, 1)];

        let mut rolls = ScriptedRolls::new(&[9], &[]);
        assert_eq!(
            pick_weighted(&mut rolls, &pool),
            Some(EnchantmentKind::Sharpness)
        );

        let mut rolls = ScriptedRolls::new(&[10], &[]);
        assert_eq!(
            pick_weighted(&mut rolls, &pool),
            Some(EnchantmentKind::Thorns)
        );
    }

    #[test]
    fn test_empty_pool_yields_none() {
        let mut rolls = ScriptedRolls::new(&[], &[]);
        assert_eq!(pick_weighted(&mut rolls, &[]), None);
    }

    #[test]
    fn test_total_weight() {
        let pool = vec![
            (EnchantmentKind::Efficiency, 1),
            (EnchantmentKind::SilkTouch, 1),
            (EnchantmentKind::Unbreaking, 2),
        ];
        assert_eq!(total_weight(&pool), 10 + 1 + 5);
    }
}
