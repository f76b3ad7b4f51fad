//! Deterministic weighted-random enchantment selection.
//!
//! Reproduces the modified-level roll a game server's preview step
//! computed, picks a primary enchantment consistent with it, and
//! probabilistically chains mutually-compatible bonus enchantments,
//! identically across the preview/commit protocol and across restarts.

mod eligibility;
mod engine;
mod error;
mod host;
mod level;
mod rng;
mod selector;

pub use eligibility::*;
pub use engine::*;
pub use error::*;
pub use host::*;
pub use level::*;
pub use rng::*;
pub use selector::*;
