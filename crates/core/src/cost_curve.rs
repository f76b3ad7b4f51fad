//! Enchantability cost windows.
//!
//! Every enchantment requires the randomized "modified enchantment
//! level" to fall inside a `[min, max]` window that depends on the
//! enchantment level being offered. The window formulas come in a
//! handful of families; each variant carries its constants as data and
//! the evaluator lives here, so no per-enchantment behavior override is
//! needed.

use serde::{Deserialize, Serialize};

/// Closed-form `[min, max]` enchantability window for an enchantment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostCurve {
    /// `min = base + per_level * (level - 1)`, `max = min + window`.
    LinearWindow {
        /// Minimum cost at level 1.
        base: u32,
        /// Cost increase per enchantment level.
        per_level: u32,
        /// Width of the acceptance window above `min`.
        window: u32,
    },
    /// `min = base + per_level * level`, `max = min + window`.
    LinearWindowFromLevel {
        /// Constant offset (the level term starts at `level`, not `level - 1`).
        base: u32,
        /// Cost increase per enchantment level.
        per_level: u32,
        /// Width of the acceptance window above `min`.
        window: u32,
    },
    /// `min = base + per_level * level`, `max` fixed regardless of level.
    FixedCeiling {
        /// Constant offset of the minimum.
        base: u32,
        /// Cost increase per enchantment level.
        per_level: u32,
        /// Level-independent maximum.
        ceiling: u32,
    },
    /// Both bounds fixed regardless of level.
    Constant {
        /// Minimum cost.
        min: u32,
        /// Maximum cost.
        max: u32,
    },
    /// Melee damage family (Sharpness / Smite / Bane of Arthropods).
    Damage(DamageKind),
    /// Loot bonus family (Fortune / Looting / Luck of the Sea):
    /// `min = 15 + 9 * (level - 1)`, `max = min + 50`.
    LootBonus,
    /// Armor protection family; the acceptance window equals the
    /// per-level cost.
    Protection(ProtectionKind),
}

/// Damage sub-variant constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageKind {
    /// Sharpness (all targets)
    All,
    /// Smite (undead)
    Undead,
    /// Bane of Arthropods
    Arthropods,
}

impl DamageKind {
    fn base(self) -> u32 {
        match self {
            DamageKind::All => 1,
            DamageKind::Undead | DamageKind::Arthropods => 5,
        }
    }

    fn per_level(self) -> u32 {
        match self {
            DamageKind::All => 11,
            DamageKind::Undead | DamageKind::Arthropods => 8,
        }
    }

    const WINDOW: u32 = 20;
}

/// Protection sub-variant constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtectionKind {
    /// Protection (all damage)
    All,
    /// Fire Protection
    Fire,
    /// Feather Falling
    Fall,
    /// Blast Protection
    Explosion,
    /// Projectile Protection
    Projectile,
}

impl ProtectionKind {
    fn base(self) -> u32 {
        match self {
            ProtectionKind::All => 1,
            ProtectionKind::Fire => 10,
            ProtectionKind::Fall => 5,
            ProtectionKind::Explosion => 5,
            ProtectionKind::Projectile => 3,
        }
    }

    fn per_level(self) -> u32 {
        match self {
            ProtectionKind::All => 11,
            ProtectionKind::Fire => 8,
            ProtectionKind::Fall => 6,
            ProtectionKind::Explosion => 8,
            ProtectionKind::Projectile => 6,
        }
    }
}

impl CostCurve {
    /// Minimum enchantability required at `level` (level is 1-based).
    pub fn min_cost(self, level: u32) -> u32 {
        match self {
            CostCurve::LinearWindow { base, per_level, .. } => base + per_level * (level - 1),
            CostCurve::LinearWindowFromLevel { base, per_level, .. } => base + per_level * level,
            CostCurve::FixedCeiling { base, per_level, .. } => base + per_level * level,
            CostCurve::Constant { min, .. } => min,
            CostCurve::Damage(kind) => kind.base() + kind.per_level() * (level - 1),
            CostCurve::LootBonus => 15 + 9 * (level - 1),
            CostCurve::Protection(kind) => kind.base() + kind.per_level() * (level - 1),
        }
    }

    /// Maximum enchantability accepted at `level` (inclusive).
    pub fn max_cost(self, level: u32) -> u32 {
        match self {
            CostCurve::LinearWindow { window, .. } => self.min_cost(level) + window,
            CostCurve::LinearWindowFromLevel { window, .. } => self.min_cost(level) + window,
            CostCurve::FixedCeiling { ceiling, .. } => ceiling,
            CostCurve::Constant { max, .. } => max,
            CostCurve::Damage(_) => self.min_cost(level) + DamageKind::WINDOW,
            CostCurve::LootBonus => self.min_cost(level) + 50,
            CostCurve::Protection(kind) => self.min_cost(level) + kind.per_level(),
        }
    }

    /// Whether `modified_level` falls inside the window at `level`.
    pub fn accepts(self, level: u32, modified_level: u32) -> bool {
        self.min_cost(level) <= modified_level && modified_level <= self.max_cost(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enchantment::EnchantmentKind;

    #[test]
    fn test_linear_window() {
        // Efficiency: 1 + 10*(L-1), window 50
        let curve = EnchantmentKind::Efficiency.cost_curve();
        assert_eq!(curve.min_cost(1), 1);
        assert_eq!(curve.max_cost(1), 51);
        assert_eq!(curve.min_cost(5), 41);
        assert_eq!(curve.max_cost(5), 91);
    }

    #[test]
    fn test_constant_window() {
        let curve = EnchantmentKind::SilkTouch.cost_curve();
        assert_eq!(curve.min_cost(1), 15);
        assert_eq!(curve.max_cost(1), 65);
        assert!(curve.accepts(1, 15));
        assert!(curve.accepts(1, 65));
        assert!(!curve.accepts(1, 14));
        assert!(!curve.accepts(1, 66));
    }

    #[test]
    fn test_fixed_ceiling() {
        // Loyalty: min = 5 + 7*L, max = 50
        let curve = EnchantmentKind::Loyalty.cost_curve();
        assert_eq!(curve.min_cost(1), 12);
        assert_eq!(curve.min_cost(3), 26);
        assert_eq!(curve.max_cost(1), 50);
        assert_eq!(curve.max_cost(3), 50);
    }

    #[test]
    fn test_protection_window_equals_per_level() {
        // Fire Protection: min = 10 + 8*(L-1), max = min + 8
        let curve = EnchantmentKind::FireProtection.cost_curve();
        assert_eq!(curve.min_cost(1), 10);
        assert_eq!(curve.max_cost(1), 18);
        assert_eq!(curve.min_cost(4), 34);
        assert_eq!(curve.max_cost(4), 42);
    }

    #[test]
    fn test_damage_variants() {
        let sharpness = EnchantmentKind::Sharpness.cost_curve();
        assert_eq!(sharpness.min_cost(1), 1);
        assert_eq!(sharpness.max_cost(1), 21);
        let smite = EnchantmentKind::Smite.cost_curve();
        assert_eq!(smite.min_cost(2), 13);
        assert_eq!(smite.max_cost(2), 33);
    }

    #[test]
    fn test_loot_bonus() {
        let curve = EnchantmentKind::Fortune.cost_curve();
        assert_eq!(curve.min_cost(1), 15);
        assert_eq!(curve.min_cost(3), 33);
        assert_eq!(curve.max_cost(3), 83);
    }

    #[test]
    fn test_all_windows_well_formed() {
        for kind in EnchantmentKind::ALL {
            let curve = kind.cost_curve();
            let mut prev_min = 0;
            for level in 1..=kind.max_level() {
                let min = curve.min_cost(level);
                let max = curve.max_cost(level);
                assert!(min <= max, "{kind:?} level {level}: min {min} > max {max}");
                assert!(
                    min >= prev_min,
                    "{kind:?} level {level}: window moved backwards"
                );
                prev_min = min;
            }
        }
    }
}
