//! Where damage rolls come from.
//!
//! The loop asks a `DamageSource` for one roll per turn. Matches use a seeded
//! [`BattleRng`]; tests swap in [`FixedDamage`] or [`ScriptedDamage`] to pin
//! every roll.

use smallvec::SmallVec;

use crate::core::{BattleError, BattleRng, DamageRange, Result};

/// Supplier of per-turn damage.
///
/// Implementations should return a value of at least 1. The loop raises a
/// zero roll to 1 so a match can never stall.
pub trait DamageSource {
    /// Roll damage for one attack.
    fn roll(&mut self, range: DamageRange) -> u32;
}

/// Uniform draw over the inclusive range.
impl DamageSource for BattleRng {
    fn roll(&mut self, range: DamageRange) -> u32 {
        self.roll_inclusive(range.min()..=range.max())
    }
}

impl<S: DamageSource + ?Sized> DamageSource for &mut S {
    fn roll(&mut self, range: DamageRange) -> u32 {
        (**self).roll(range)
    }
}

/// Returns the same damage every turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixedDamage {
    /// Always this amount, whatever the range.
    Amount(u32),
    /// Always the range's lower bound.
    Minimum,
}

impl FixedDamage {
    pub fn new(amount: u32) -> Result<Self> {
        if amount == 0 {
            return Err(BattleError::ZeroFixedDamage);
        }
        Ok(FixedDamage::Amount(amount))
    }

    #[must_use]
    pub const fn minimum() -> Self {
        FixedDamage::Minimum
    }
}

impl DamageSource for FixedDamage {
    fn roll(&mut self, range: DamageRange) -> u32 {
        match *self {
            FixedDamage::Amount(amount) => amount,
            FixedDamage::Minimum => range.min(),
        }
    }
}

/// Replays a fixed sequence of rolls, wrapping around at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedDamage {
    /// Inline up to eight rolls.
    rolls: SmallVec<[u32; 8]>,
    cursor: usize,
}

impl ScriptedDamage {
    pub fn new(rolls: &[u32]) -> Result<Self> {
        if rolls.is_empty() || rolls.contains(&0) {
            return Err(BattleError::EmptyDamageScript);
        }
        Ok(Self {
            rolls: SmallVec::from_slice(rolls),
            cursor: 0,
        })
    }

    /// Number of rolls handed out so far.
    #[must_use]
    pub fn rolls_taken(&self) -> usize {
        self.cursor
    }
}

impl DamageSource for ScriptedDamage {
    fn roll(&mut self, _range: DamageRange) -> u32 {
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll
    }
}
