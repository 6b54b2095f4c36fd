//! Match records: everything needed to reproduce a match.
//!
//! A record stores the seed, the config, and the pair as drawn, plus the
//! turn log it produced. Replaying the seed against the same pair must
//! produce the same log; [`MatchRecord::verify`] checks exactly that.

use serde::{Deserialize, Serialize};

use crate::combat::{Match, MatchOutcome, NoopObserver, TurnReport};
use crate::core::{BattleConfig, BattleRng, Combatant, Result, Side};

/// Stream name for damage rolls derived from a match seed.
pub(crate) const DAMAGE_STREAM: &str = "damage";

/// Stream name for pair selection derived from a match seed.
pub(crate) const SELECTION_STREAM: &str = "selection";

/// A finished match, ready to store or replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Seed this match's streams were derived from.
    pub seed: u64,
    pub config: BattleConfig,
    /// The pair at full health, in drawn order.
    pub combatants: [Combatant; 2],
    pub first_attacker: Side,
    pub winner: Side,
    pub turns: Vec<TurnReport>,
}

impl MatchRecord {
    pub(crate) fn from_outcome(
        seed: u64,
        config: BattleConfig,
        combatants: [Combatant; 2],
        outcome: MatchOutcome,
    ) -> Self {
        Self {
            seed,
            config,
            combatants,
            first_attacker: outcome.first_attacker,
            winner: outcome.winner_side,
            turns: outcome.log,
        }
    }

    #[must_use]
    pub fn winner(&self) -> &Combatant {
        &self.combatants[self.winner.index()]
    }

    #[must_use]
    pub fn loser(&self) -> &Combatant {
        &self.combatants[self.winner.opponent().index()]
    }

    /// Re-run the match from its seed.
    pub fn replay(&self) -> Result<MatchOutcome> {
        self.config.validate()?;
        let damage = BattleRng::new(self.seed).for_context(DAMAGE_STREAM);
        let game = Match::new(self.combatants.clone())?.with_first_attacker(self.first_attacker);
        Ok(game.run(self.config.damage, damage, NoopObserver))
    }

    /// Does a replay reproduce the stored winner and turn log?
    pub fn verify(&self) -> Result<bool> {
        let outcome = self.replay()?;
        Ok(outcome.winner_side == self.winner && outcome.log == self.turns)
    }

    /// Compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::FixedDamage;
    use crate::core::{BattleError, DamageRange};
    use crate::roster::Species;

    fn pair() -> [Combatant; 2] {
        [
            Combatant::new("Flufosourus", Species::Cat, 100),
            Combatant::new("Scaley", Species::Fish, 100),
        ]
    }

    fn record(seed: u64) -> MatchRecord {
        let config = BattleConfig::new().with_seed(seed);
        let damage = BattleRng::new(seed).for_context(DAMAGE_STREAM);
        let outcome = Match::new(pair())
            .unwrap()
            .run(config.damage, damage, NoopObserver);
        MatchRecord::from_outcome(seed, config, pair(), outcome)
    }

    #[test]
    fn test_verify_roundtrip() {
        let record = record(17);
        assert!(record.verify().unwrap());
        assert_eq!(record.loser().name(), record.turns.last().unwrap().defender_name);
    }

    #[test]
    fn test_tampered_log_fails_verify() {
        let mut record = record(17);
        record.turns[0].damage += 1;
        assert!(!record.verify().unwrap());
    }

    #[test]
    fn test_replay_respects_first_attacker() {
        let config = BattleConfig::new().with_damage(DamageRange::fixed(50).unwrap());
        let outcome = Match::new(pair())
            .unwrap()
            .with_first_attacker(Side::Second)
            .run(config.damage, FixedDamage::new(50).unwrap(), NoopObserver);
        let record = MatchRecord::from_outcome(3, config, pair(), outcome);

        let replayed = record.replay().unwrap();
        assert_eq!(replayed.winner_side, Side::Second);
        assert!(record.verify().unwrap());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let record = record(5);
        let bytes = record.to_bytes().unwrap();
        assert_eq!(MatchRecord::from_bytes(&bytes).unwrap(), record);
    }

    #[test]
    fn test_from_bytes_garbage() {
        assert!(matches!(
            MatchRecord::from_bytes(&[0xff, 0x01]),
            Err(BattleError::Record(_))
        ));
    }

    #[test]
    fn test_replay_rejects_bad_pair() {
        let mut record = record(5);
        record.combatants[1] = record.combatants[1].clone().with_health(0);
        assert!(matches!(
            record.replay(),
            Err(BattleError::NonPositiveHealth { .. })
        ));
    }
}
