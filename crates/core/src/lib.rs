#![warn(missing_docs)]
//! Static game-balance data shared across the workspace.
//!
//! Everything in this crate is immutable lookup: item enchantability
//! ratings, enchantment weights and level caps, cost-curve windows,
//! applicability predicates and the conflict relation. Accessors are
//! total over the enumerated domains; a missing entry is a defect in
//! this crate, never a runtime error.

pub mod cost_curve;
pub mod enchantment;
pub mod item;

// Re-export commonly used types
pub use cost_curve::CostCurve;
pub use enchantment::EnchantmentKind;
pub use item::{ArmorKind, ArmorMaterial, ItemKind, ToolKind, ToolMaterial};
