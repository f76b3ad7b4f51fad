//! Enchantment identifiers and their balance tables.
//!
//! Weights, level caps, cost curves, applicability and the conflict
//! relation are keyed off this enum with total `match` tables, so any
//! missing entry is caught at compile time.

use serde::{Deserialize, Serialize};

use crate::cost_curve::{CostCurve, DamageKind, ProtectionKind};
use crate::item::{ArmorKind, ItemKind, ToolKind};

/// Every enchantment the table path knows about.
///
/// The variant order is the canonical enumeration order: candidate
/// pools are built by walking [`EnchantmentKind::ALL`] front to back,
/// which keeps selection iteration deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnchantmentKind {
    // Armor enchantments
    /// Reduces damage from all sources
    Protection,
    /// Reduces fire damage
    FireProtection,
    /// Reduces fall damage (boots)
    FeatherFalling,
    /// Reduces explosion damage
    BlastProtection,
    /// Reduces projectile damage
    ProjectileProtection,
    /// Extends underwater breathing (helmet)
    Respiration,
    /// Removes underwater mining speed penalty (helmet)
    AquaAffinity,
    /// Increases underwater movement speed (boots)
    DepthStrider,
    /// Reflects damage to attackers
    Thorns,

    // Sword enchantments
    /// Increases attack damage
    Sharpness,
    /// Extra damage against undead
    Smite,
    /// Extra damage against arthropods
    BaneOfArthropods,
    /// Increases knockback
    Knockback,
    /// Sets targets on fire
    FireAspect,
    /// Increases mob loot drops
    Looting,
    /// Increases sweep attack damage
    SweepingEdge,

    // Tool enchantments
    /// Increases mining speed
    Efficiency,
    /// Blocks drop themselves instead of their usual drops
    SilkTouch,
    /// Increases block drop amounts
    Fortune,

    // Bow enchantments
    /// Increases arrow damage
    Power,
    /// Increases arrow knockback
    Punch,
    /// Arrows set targets on fire
    Flame,
    /// Firing consumes no arrows
    Infinity,

    // Fishing rod enchantments
    /// Better fishing loot
    LuckOfTheSea,
    /// Faster fishing bites
    Lure,

    // Trident enchantments
    /// Thrown trident returns to its owner
    Loyalty,
    /// Extra damage against aquatic mobs
    Impaling,
    /// Throwing launches the player
    Riptide,
    /// Summons lightning during thunderstorms
    Channeling,

    // Crossbow enchantments
    /// Faster crossbow reload
    QuickCharge,
    /// Fires three arrows at once
    Multishot,
    /// Arrows pass through multiple targets
    Piercing,

    // Universal enchantments
    /// Reduces durability loss
    Unbreaking,

    // Treasure enchantments (never offered by the table path)
    /// Repairs the item using collected XP
    Mending,
    /// Walking on water freezes it (boots)
    FrostWalker,
    /// Armor cannot be removed once worn
    CurseOfBinding,
    /// Item vanishes on death
    CurseOfVanishing,
}

impl EnchantmentKind {
    /// All enchantments in canonical enumeration order.
    pub const ALL: [EnchantmentKind; 37] = [
        EnchantmentKind::Protection,
        EnchantmentKind::FireProtection,
        EnchantmentKind::FeatherFalling,
        EnchantmentKind::BlastProtection,
        EnchantmentKind::ProjectileProtection,
        EnchantmentKind::Respiration,
        EnchantmentKind::AquaAffinity,
        EnchantmentKind::DepthStrider,
        EnchantmentKind::Thorns,
        EnchantmentKind::Sharpness,
        EnchantmentKind::Smite,
        EnchantmentKind::BaneOfArthropods,
        EnchantmentKind::Knockback,
        EnchantmentKind::FireAspect,
        EnchantmentKind::Looting,
        EnchantmentKind::SweepingEdge,
        EnchantmentKind::Efficiency,
        EnchantmentKind::SilkTouch,
        EnchantmentKind::Fortune,
        EnchantmentKind::Power,
        EnchantmentKind::Punch,
        EnchantmentKind::Flame,
        EnchantmentKind::Infinity,
        EnchantmentKind::LuckOfTheSea,
        EnchantmentKind::Lure,
        EnchantmentKind::Loyalty,
        EnchantmentKind::Impaling,
        EnchantmentKind::Riptide,
        EnchantmentKind::Channeling,
        EnchantmentKind::QuickCharge,
        EnchantmentKind::Multishot,
        EnchantmentKind::Piercing,
        EnchantmentKind::Unbreaking,
        EnchantmentKind::Mending,
        EnchantmentKind::FrostWalker,
        EnchantmentKind::CurseOfBinding,
        EnchantmentKind::CurseOfVanishing,
    ];

    /// Maximum level this enchantment can be offered at.
    pub fn max_level(self) -> u32 {
        match self {
            EnchantmentKind::Protection => 4,
            EnchantmentKind::FireProtection => 4,
            EnchantmentKind::FeatherFalling => 4,
            EnchantmentKind::BlastProtection => 4,
            EnchantmentKind::ProjectileProtection => 4,
            EnchantmentKind::Respiration => 3,
            EnchantmentKind::AquaAffinity => 1,
            EnchantmentKind::DepthStrider => 3,
            EnchantmentKind::Thorns => 3,
            EnchantmentKind::Sharpness => 5,
            EnchantmentKind::Smite => 5,
            EnchantmentKind::BaneOfArthropods => 5,
            EnchantmentKind::Knockback => 2,
            EnchantmentKind::FireAspect => 2,
            EnchantmentKind::Looting => 3,
            EnchantmentKind::SweepingEdge => 3,
            EnchantmentKind::Efficiency => 5,
            EnchantmentKind::SilkTouch => 1,
            EnchantmentKind::Fortune => 3,
            EnchantmentKind::Power => 5,
            EnchantmentKind::Punch => 2,
            EnchantmentKind::Flame => 1,
            EnchantmentKind::Infinity => 1,
            EnchantmentKind::LuckOfTheSea => 3,
            EnchantmentKind::Lure => 3,
            EnchantmentKind::Loyalty => 3,
            EnchantmentKind::Impaling => 5,
            EnchantmentKind::Riptide => 3,
            EnchantmentKind::Channeling => 1,
            EnchantmentKind::QuickCharge => 3,
            EnchantmentKind::Multishot => 1,
            EnchantmentKind::Piercing => 4,
            EnchantmentKind::Unbreaking => 3,
            EnchantmentKind::Mending => 1,
            EnchantmentKind::FrostWalker => 2,
            EnchantmentKind::CurseOfBinding => 1,
            EnchantmentKind::CurseOfVanishing => 1,
        }
    }

    /// Relative selection weight among eligible candidates.
    pub fn weight(self) -> u32 {
        match self {
            EnchantmentKind::Protection => 10,
            EnchantmentKind::FireProtection => 5,
            EnchantmentKind::FeatherFalling => 5,
            EnchantmentKind::BlastProtection => 2,
            EnchantmentKind::ProjectileProtection => 5,
            EnchantmentKind::Respiration => 2,
            EnchantmentKind::AquaAffinity => 2,
            EnchantmentKind::DepthStrider => 2,
            EnchantmentKind::Thorns => 1,
            EnchantmentKind::Sharpness => 10,
            EnchantmentKind::Smite => 5,
            EnchantmentKind::BaneOfArthropods => 5,
            EnchantmentKind::Knockback => 5,
            EnchantmentKind::FireAspect => 2,
            EnchantmentKind::Looting => 2,
            EnchantmentKind::SweepingEdge => 2,
            EnchantmentKind::Efficiency => 10,
            EnchantmentKind::SilkTouch => 1,
            EnchantmentKind::Fortune => 2,
            EnchantmentKind::Power => 10,
            EnchantmentKind::Punch => 2,
            EnchantmentKind::Flame => 2,
            EnchantmentKind::Infinity => 1,
            EnchantmentKind::LuckOfTheSea => 2,
            EnchantmentKind::Lure => 2,
            EnchantmentKind::Loyalty => 5,
            EnchantmentKind::Impaling => 2,
            EnchantmentKind::Riptide => 2,
            EnchantmentKind::Channeling => 1,
            EnchantmentKind::QuickCharge => 10,
            EnchantmentKind::Multishot => 3,
            EnchantmentKind::Piercing => 30,
            EnchantmentKind::Unbreaking => 5,
            EnchantmentKind::Mending => 2,
            EnchantmentKind::FrostWalker => 2,
            EnchantmentKind::CurseOfBinding => 1,
            EnchantmentKind::CurseOfVanishing => 1,
        }
    }

    /// Treasure enchantments never appear in table offers; they are
    /// filtered out when eligible candidates are enumerated.
    pub fn is_treasure(self) -> bool {
        matches!(
            self,
            EnchantmentKind::Mending
                | EnchantmentKind::FrostWalker
                | EnchantmentKind::CurseOfBinding
                | EnchantmentKind::CurseOfVanishing
        )
    }

    /// Enchantability window for this enchantment.
    pub fn cost_curve(self) -> CostCurve {
        match self {
            EnchantmentKind::Protection => CostCurve::Protection(ProtectionKind::All),
            EnchantmentKind::FireProtection => CostCurve::Protection(ProtectionKind::Fire),
            EnchantmentKind::FeatherFalling => CostCurve::Protection(ProtectionKind::Fall),
            EnchantmentKind::BlastProtection => CostCurve::Protection(ProtectionKind::Explosion),
            EnchantmentKind::ProjectileProtection => {
                CostCurve::Protection(ProtectionKind::Projectile)
            }
            EnchantmentKind::Respiration => CostCurve::LinearWindowFromLevel {
                base: 0,
                per_level: 10,
                window: 30,
            },
            EnchantmentKind::AquaAffinity => CostCurve::Constant { min: 1, max: 41 },
            EnchantmentKind::DepthStrider => CostCurve::LinearWindowFromLevel {
                base: 0,
                per_level: 10,
                window: 15,
            },
            EnchantmentKind::Thorns => CostCurve::LinearWindow {
                base: 10,
                per_level: 20,
                window: 50,
            },
            EnchantmentKind::Sharpness => CostCurve::Damage(DamageKind::All),
            EnchantmentKind::Smite => CostCurve::Damage(DamageKind::Undead),
            EnchantmentKind::BaneOfArthropods => CostCurve::Damage(DamageKind::Arthropods),
            EnchantmentKind::Knockback => CostCurve::LinearWindow {
                base: 5,
                per_level: 20,
                window: 50,
            },
            EnchantmentKind::FireAspect => CostCurve::LinearWindow {
                base: 10,
                per_level: 20,
                window: 50,
            },
            EnchantmentKind::Looting => CostCurve::LootBonus,
            EnchantmentKind::SweepingEdge => CostCurve::LinearWindow {
                base: 5,
                per_level: 9,
                window: 15,
            },
            EnchantmentKind::Efficiency => CostCurve::LinearWindow {
                base: 1,
                per_level: 10,
                window: 50,
            },
            EnchantmentKind::SilkTouch => CostCurve::Constant { min: 15, max: 65 },
            EnchantmentKind::Fortune => CostCurve::LootBonus,
            EnchantmentKind::Power => CostCurve::LinearWindow {
                base: 1,
                per_level: 10,
                window: 15,
            },
            EnchantmentKind::Punch => CostCurve::LinearWindow {
                base: 12,
                per_level: 20,
                window: 25,
            },
            EnchantmentKind::Flame => CostCurve::Constant { min: 20, max: 50 },
            EnchantmentKind::Infinity => CostCurve::Constant { min: 20, max: 50 },
            EnchantmentKind::LuckOfTheSea => CostCurve::LootBonus,
            EnchantmentKind::Lure => CostCurve::LinearWindow {
                base: 15,
                per_level: 9,
                window: 50,
            },
            EnchantmentKind::Loyalty => CostCurve::FixedCeiling {
                base: 5,
                per_level: 7,
                ceiling: 50,
            },
            EnchantmentKind::Impaling => CostCurve::LinearWindow {
                base: 1,
                per_level: 8,
                window: 20,
            },
            EnchantmentKind::Riptide => CostCurve::FixedCeiling {
                base: 10,
                per_level: 7,
                ceiling: 50,
            },
            EnchantmentKind::Channeling => CostCurve::Constant { min: 25, max: 50 },
            EnchantmentKind::QuickCharge => CostCurve::LinearWindow {
                base: 12,
                per_level: 20,
                window: 25,
            },
            EnchantmentKind::Multishot => CostCurve::Constant { min: 20, max: 50 },
            EnchantmentKind::Piercing => CostCurve::LinearWindow {
                base: 15,
                per_level: 9,
                window: 50,
            },
            EnchantmentKind::Unbreaking => CostCurve::LinearWindow {
                base: 5,
                per_level: 8,
                window: 50,
            },
            EnchantmentKind::Mending => CostCurve::LinearWindowFromLevel {
                base: 0,
                per_level: 25,
                window: 50,
            },
            EnchantmentKind::FrostWalker => CostCurve::LinearWindowFromLevel {
                base: 0,
                per_level: 10,
                window: 15,
            },
            EnchantmentKind::CurseOfBinding => CostCurve::Constant { min: 25, max: 50 },
            EnchantmentKind::CurseOfVanishing => CostCurve::Constant { min: 25, max: 50 },
        }
    }

    /// Whether this enchantment can go on `item` at the table.
    ///
    /// Books are handled by the caller: a book accepts every
    /// non-treasure enchantment regardless of this predicate.
    pub fn applies_to(self, item: ItemKind) -> bool {
        match self {
            // Any armor piece
            EnchantmentKind::Protection
            | EnchantmentKind::FireProtection
            | EnchantmentKind::BlastProtection
            | EnchantmentKind::ProjectileProtection
            | EnchantmentKind::Thorns
            | EnchantmentKind::CurseOfBinding => matches!(item, ItemKind::Armor(_, _)),

            // Boots only
            EnchantmentKind::FeatherFalling
            | EnchantmentKind::DepthStrider
            | EnchantmentKind::FrostWalker => {
                matches!(item, ItemKind::Armor(ArmorKind::Boots, _))
            }

            // Helmet only
            EnchantmentKind::Respiration | EnchantmentKind::AquaAffinity => {
                matches!(item, ItemKind::Armor(ArmorKind::Helmet, _))
            }

            // Swords
            EnchantmentKind::Sharpness
            | EnchantmentKind::Smite
            | EnchantmentKind::BaneOfArthropods
            | EnchantmentKind::Knockback
            | EnchantmentKind::FireAspect
            | EnchantmentKind::Looting
            | EnchantmentKind::SweepingEdge => {
                matches!(item, ItemKind::Tool(ToolKind::Sword, _))
            }

            // Mining tools
            EnchantmentKind::Efficiency
            | EnchantmentKind::SilkTouch
            | EnchantmentKind::Fortune => matches!(
                item,
                ItemKind::Tool(
                    ToolKind::Pickaxe | ToolKind::Axe | ToolKind::Shovel | ToolKind::Hoe,
                    _
                )
            ),

            // Bows
            EnchantmentKind::Power
            | EnchantmentKind::Punch
            | EnchantmentKind::Flame
            | EnchantmentKind::Infinity => matches!(item, ItemKind::Bow),

            // Fishing rods
            EnchantmentKind::LuckOfTheSea | EnchantmentKind::Lure => {
                matches!(item, ItemKind::FishingRod)
            }

            // Tridents
            EnchantmentKind::Loyalty
            | EnchantmentKind::Impaling
            | EnchantmentKind::Riptide
            | EnchantmentKind::Channeling => matches!(item, ItemKind::Trident),

            // Crossbows
            EnchantmentKind::QuickCharge
            | EnchantmentKind::Multishot
            | EnchantmentKind::Piercing => matches!(item, ItemKind::Crossbow),

            // Anything with durability
            EnchantmentKind::Unbreaking
            | EnchantmentKind::Mending
            | EnchantmentKind::CurseOfVanishing => !matches!(item, ItemKind::Book),
        }
    }

    /// Symmetric conflict relation: two conflicting enchantments may
    /// never coexist on one item.
    pub fn conflicts_with(self, other: EnchantmentKind) -> bool {
        if self == other {
            return false;
        }

        let damage = [
            EnchantmentKind::Sharpness,
            EnchantmentKind::Smite,
            EnchantmentKind::BaneOfArthropods,
        ];
        if damage.contains(&self) && damage.contains(&other) {
            return true;
        }

        let protections = [
            EnchantmentKind::Protection,
            EnchantmentKind::FireProtection,
            EnchantmentKind::BlastProtection,
            EnchantmentKind::ProjectileProtection,
        ];
        if protections.contains(&self) && protections.contains(&other) {
            return true;
        }

        let pair = |a, b| (self == a && other == b) || (self == b && other == a);
        pair(EnchantmentKind::SilkTouch, EnchantmentKind::Fortune)
            || pair(EnchantmentKind::Infinity, EnchantmentKind::Mending)
            || pair(EnchantmentKind::Riptide, EnchantmentKind::Loyalty)
            || pair(EnchantmentKind::Riptide, EnchantmentKind::Channeling)
            || pair(EnchantmentKind::Multishot, EnchantmentKind::Piercing)
            || pair(EnchantmentKind::DepthStrider, EnchantmentKind::FrostWalker)
    }
}
