//! Failure taxonomy for a single enchanting operation.
//!
//! Every failure is local to one player's one operation: the engine
//! logs it, leaves the host's event data untouched (or partially
//! corrected, as documented per call), and returns control.

use enchantfix_core::ItemKind;
use thiserror::Error;

use crate::host::PlayerId;

/// Why an enchanting operation could not be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnchantError {
    /// No enchantment candidate exists at the computed modified level
    /// even though the host believes the item is enchantable. Signals
    /// a gap in the balance tables; the host's own proposal is left
    /// uncorrected.
    #[error("no candidate enchantment for {item:?} at modified level {modified_level}")]
    TableGap {
        /// Item the host proposed offers for.
        item: ItemKind,
        /// Modified level with no qualifying candidate.
        modified_level: u32,
    },

    /// A commit arrived for a player with no recorded preview. This is
    /// a host-side ordering defect; the commit is aborted whole.
    #[error("player {player:?} committed an enchant without a preview")]
    MissingPendingActivation {
        /// Player the commit arrived for.
        player: PlayerId,
    },

    /// The weighted selector was invoked on an empty or zero-weight
    /// pool. Unreachable with validated tables; aborted defensively.
    #[error("weighted selector exhausted a candidate pool")]
    SelectorExhausted,
}
