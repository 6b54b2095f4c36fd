//! Combatants and the two sides of a match.
//!
//! ## Side
//!
//! Which slot of the ordered pair a combatant occupies. The loop tracks the
//! current attacker as a `Side` and flips it every turn.
//!
//! ## Combatant
//!
//! A named pet with a health pool. Health only ever goes down, and never
//! below zero.

use serde::{Deserialize, Serialize};

use crate::roster::Species;

/// One of the two slots in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Both sides in pair order.
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Position in the pair (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

/// A participant in a match.
///
/// ```
/// use pet_battle::core::Combatant;
/// use pet_battle::roster::Species;
///
/// let mut george = Combatant::new("George", Species::Monkey, 100);
/// assert_eq!(george.title(), "George the Monkey");
///
/// george.apply_damage(130);
/// assert_eq!(george.health(), 0);
/// assert!(george.is_defeated());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    name: String,
    species: Species,
    health: u32,
    max_health: u32,
}

impl Combatant {
    /// Create a combatant at full health.
    pub fn new(name: impl Into<String>, species: Species, max_health: u32) -> Self {
        Self {
            name: name.into(),
            species,
            health: max_health,
            max_health,
        }
    }

    /// Override the starting health.
    ///
    /// Not clamped here: `Match::new` rejects zero or above-maximum health.
    #[must_use]
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn species(&self) -> Species {
        self.species
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// "Flufosourus the Cat".
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} the {}", self.name, self.species)
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Subtract `damage`, saturating at zero. Returns the new health.
    pub fn apply_damage(&mut self, damage: u32) -> u32 {
        self.health = self.health.saturating_sub(damage);
        self.health
    }
}
