//! Error type shared by every fallible operation in the crate.
//!
//! All errors are precondition violations detected before a match starts,
//! or codec failures when reading a stored match record. Nothing here is
//! retried.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BattleError>;

/// Everything that can go wrong while setting up or recording a match.
#[derive(Debug, Error)]
pub enum BattleError {
    #[error("a match needs exactly two combatants, got {count}")]
    CombatantCount { count: usize },

    #[error("combatant must start with positive health ({name})")]
    NonPositiveHealth { name: String },

    #[error("{name} starts with {health} health, above its maximum of {max}")]
    HealthAboveMaximum { name: String, health: u32, max: u32 },

    #[error("max health must be positive")]
    ZeroMaxHealth,

    #[error("damage range invalid (min {min}, max {max}); need 1 <= min <= max")]
    InvalidDamageRange { min: u32, max: u32 },

    #[error("fixed damage must be at least 1")]
    ZeroFixedDamage,

    #[error("damage script must be non-empty and contain only positive rolls")]
    EmptyDamageScript,

    #[error("roster needs at least two pets to draw a pair, has {available}")]
    RosterTooSmall { available: usize },

    #[error("roster lists `{name}` more than once")]
    DuplicatePet { name: String },

    #[error("roster has no pet at position {index}")]
    RosterIndex { index: usize },

    #[error("unknown species `{0}`")]
    UnknownSpecies(String),

    #[error("match record codec failed: {0}")]
    Record(#[from] bincode::Error),
}
