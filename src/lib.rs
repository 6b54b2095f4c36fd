//! # pet-battle
//!
//! A turn-based battle between two pets drawn at random from a roster.
//!
//! ## How a match plays out
//!
//! 1. Two distinct pets are drawn from the roster at full health.
//! 2. The first pet attacks: damage is rolled uniformly from an inclusive
//!    range (default `[10, 30]`) and subtracted from the defender, never going
//!    below zero.
//! 3. If the defender is at zero, the attacker wins. Otherwise the roles swap
//!    and the next turn begins.
//!
//! ## Determinism
//!
//! Every random decision comes from a seeded ChaCha8 stream (`BattleRng`).
//! Pair selection, damage, and narration each use their own stream, so a seed
//! reproduces a match exactly and a `MatchRecord` can be replayed and
//! verified.
//!
//! ## Modules
//!
//! - `core`: combatants, sides, RNG, configuration, errors
//! - `roster`: species catalogue and pair selection
//! - `combat`: the combat loop, damage sources, turn reports, flavor text
//! - `arena`: seeded match runner, match records, series tallies

pub mod arena;
pub mod combat;
pub mod core;
pub mod roster;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, BattleError, BattleRng, Combatant, DamageRange, Result, Side, MAX_HEALTH,
};

pub use crate::roster::{PetEntry, Roster, Species};

pub use crate::combat::{
    fight, DamageSource, FixedDamage, LogObserver, Match, MatchOutcome, NoopObserver,
    ScriptedDamage, TurnObserver, TurnReport,
};

pub use crate::arena::{play_seeded, Arena, MatchRecord, SeriesSummary};
