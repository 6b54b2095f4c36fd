//! The pool of pets a match draws its pair from.
//!
//! Drawing never reorders the roster: `draw_pair` samples two positions and
//! builds fresh combatants from them, leaving the roster untouched for the
//! next match.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::species::Species;
use crate::core::{BattleError, BattleRng, Combatant, Result};

/// A named pet waiting in the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetEntry {
    pub name: String,
    pub species: Species,
}

impl PetEntry {
    pub fn new(name: impl Into<String>, species: Species) -> Self {
        Self {
            name: name.into(),
            species,
        }
    }

    /// Turn this entry into a combatant at full health.
    #[must_use]
    pub fn enlist(&self, max_health: u32) -> Combatant {
        Combatant::new(self.name.clone(), self.species, max_health)
    }
}

/// Ordered list of pets.
///
/// ## Example
///
/// ```
/// use pet_battle::core::BattleRng;
/// use pet_battle::roster::{Roster, Species};
///
/// let roster = Roster::new()
///     .with_pet("Hoot", Species::Owl)
///     .with_pet("Wilbur", Species::Pig);
///
/// let mut rng = BattleRng::new(1);
/// let [a, b] = roster.draw_pair(&mut rng, 100).unwrap();
/// assert_ne!(a.name(), b.name());
/// assert_eq!(roster.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    entries: Vec<PetEntry>,
}

impl Default for Roster {
    /// The four house pets.
    fn default() -> Self {
        Self::new()
            .with_pet("Flufosourus", Species::Cat)
            .with_pet("Scaley", Species::Fish)
            .with_pet("Count Chocula", Species::Bat)
            .with_pet("George", Species::Monkey)
    }
}

impl Roster {
    /// An empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a pet.
    #[must_use]
    pub fn with_pet(mut self, name: impl Into<String>, species: Species) -> Self {
        self.entries.push(PetEntry::new(name, species));
        self
    }

    /// Append a pet in place.
    pub fn push(&mut self, entry: PetEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PetEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn entries(&self) -> &[PetEntry] {
        &self.entries
    }

    /// Check the roster can host matches: at least two pets, no repeated
    /// names. Series tallies key wins by name.
    pub fn validate(&self) -> Result<()> {
        if self.len() < 2 {
            return Err(BattleError::RosterTooSmall {
                available: self.len(),
            });
        }
        let mut names = BTreeSet::new();
        for entry in &self.entries {
            if !names.insert(entry.name.as_str()) {
                return Err(BattleError::DuplicatePet {
                    name: entry.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Build a pair from explicit roster positions.
    pub fn enlist(&self, indices: [usize; 2], max_health: u32) -> Result<[Combatant; 2]> {
        let [a, b] = indices;
        let first = self.get(a).ok_or(BattleError::RosterIndex { index: a })?;
        let second = self.get(b).ok_or(BattleError::RosterIndex { index: b })?;
        Ok([first.enlist(max_health), second.enlist(max_health)])
    }

    /// Sample two distinct pets and return them as fresh combatants.
    pub fn draw_pair(&self, rng: &mut BattleRng, max_health: u32) -> Result<[Combatant; 2]> {
        let (a, b) = rng.sample_pair(self.len()).ok_or(BattleError::RosterTooSmall {
            available: self.len(),
        })?;
        self.enlist([a, b], max_health)
    }
}
