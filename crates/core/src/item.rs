//! Item kinds that can be placed in an enchanting table.

use serde::{Deserialize, Serialize};

/// Category of an enchantable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// A tool (pickaxe, axe, shovel, hoe, sword).
    Tool(ToolKind, ToolMaterial),
    /// An armor piece.
    Armor(ArmorKind, ArmorMaterial),
    /// Bow
    Bow,
    /// Crossbow
    Crossbow,
    /// Trident
    Trident,
    /// Fishing rod
    FishingRod,
    /// A plain book. Accepts every non-treasure enchantment.
    Book,
}

/// Tool types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    /// Pickaxe - mines stone, ores
    Pickaxe,
    /// Axe - chops wood
    Axe,
    /// Shovel - digs dirt, sand, gravel
    Shovel,
    /// Hoe - tills farmland
    Hoe,
    /// Sword - combat weapon
    Sword,
}

/// Tool material tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ToolMaterial {
    /// Wooden tools
    Wood,
    /// Stone tools
    Stone,
    /// Iron tools
    Iron,
    /// Diamond tools
    Diamond,
    /// Gold tools (poor durability, excellent enchantability)
    Gold,
}

/// Armor slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorKind {
    /// Helmet
    Helmet,
    /// Chestplate
    Chestplate,
    /// Leggings
    Leggings,
    /// Boots
    Boots,
}

/// Armor material tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArmorMaterial {
    /// Leather armor
    Leather,
    /// Chainmail armor
    Chainmail,
    /// Iron armor
    Iron,
    /// Diamond armor
    Diamond,
    /// Gold armor
    Gold,
}

impl ItemKind {
    /// Base enchantability rating of this item.
    ///
    /// Higher ratings widen the randomized bonus applied to the nominal
    /// table cost, making high-level rolls more likely.
    pub fn base_enchantability(self) -> u32 {
        match self {
            ItemKind::Tool(_, material) => match material {
                ToolMaterial::Wood => 15,
                ToolMaterial::Stone => 5,
                ToolMaterial::Iron => 14,
                ToolMaterial::Diamond => 10,
                ToolMaterial::Gold => 22,
            },
            ItemKind::Armor(_, material) => match material {
                ArmorMaterial::Leather => 15,
                ArmorMaterial::Chainmail => 12,
                ArmorMaterial::Iron => 9,
                ArmorMaterial::Diamond => 10,
                ArmorMaterial::Gold => 25,
            },
            ItemKind::Bow
            | ItemKind::Crossbow
            | ItemKind::Trident
            | ItemKind::FishingRod
            | ItemKind::Book => 1,
        }
    }
}
