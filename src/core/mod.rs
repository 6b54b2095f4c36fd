//! Core types: combatants, sides, RNG, configuration, errors.
//!
//! Everything the combat loop and the arena build on.

pub mod combatant;
pub mod config;
pub mod error;
pub mod rng;

pub use combatant::{Combatant, Side};
pub use config::{BattleConfig, DamageRange, DEFAULT_DAMAGE, MAX_HEALTH};
pub use error::{BattleError, Result};
pub use rng::BattleRng;
