//! The combat loop.
//!
//! Two combatants trade blows: the attacker rolls damage, the defender loses
//! that much health (never below zero), and the roles swap. The first
//! defender to hit zero loses, and the attacker of that turn wins.
//!
//! Only the defender is damaged on any turn, so both sides can never reach
//! zero together. Every turn removes at least one point of health, so every
//! match ends.

use serde::{Deserialize, Serialize};

use super::damage::DamageSource;
use super::report::{TurnObserver, TurnReport};
use crate::core::{BattleConfig, BattleError, Combatant, DamageRange, Result, Side};

/// A match in progress.
///
/// ## Example
///
/// ```
/// use pet_battle::combat::{FixedDamage, Match, NoopObserver};
/// use pet_battle::core::{Combatant, DamageRange, Side};
/// use pet_battle::roster::Species;
///
/// let pair = [
///     Combatant::new("Flufosourus", Species::Cat, 100),
///     Combatant::new("Scaley", Species::Fish, 100),
/// ];
/// let range = DamageRange::new(10, 30).unwrap();
///
/// let outcome = Match::new(pair)
///     .unwrap()
///     .run(range, FixedDamage::new(25).unwrap(), NoopObserver);
///
/// assert_eq!(outcome.winner_side, Side::First);
/// assert_eq!(outcome.turns, 7);
/// ```
#[derive(Clone, Debug)]
pub struct Match {
    combatants: [Combatant; 2],
    first_attacker: Side,
    attacker: Side,
    turn: u64,
    winner: Option<Side>,
}

impl Match {
    /// Start a match between an ordered pair. The first combatant attacks
    /// first unless changed with [`Match::with_first_attacker`].
    pub fn new(combatants: [Combatant; 2]) -> Result<Self> {
        for combatant in &combatants {
            if combatant.health() == 0 {
                return Err(BattleError::NonPositiveHealth {
                    name: combatant.name().to_string(),
                });
            }
            if combatant.health() > combatant.max_health() {
                return Err(BattleError::HealthAboveMaximum {
                    name: combatant.name().to_string(),
                    health: combatant.health(),
                    max: combatant.max_health(),
                });
            }
        }

        Ok(Self {
            combatants,
            first_attacker: Side::First,
            attacker: Side::First,
            turn: 0,
            winner: None,
        })
    }

    /// Start a match from a list that must hold exactly two combatants.
    pub fn from_vec(combatants: Vec<Combatant>) -> Result<Self> {
        let count = combatants.len();
        let pair: [Combatant; 2] = combatants
            .try_into()
            .map_err(|_| BattleError::CombatantCount { count })?;
        Self::new(pair)
    }

    /// Choose which side opens. Only meaningful before the first turn.
    #[must_use]
    pub fn with_first_attacker(mut self, side: Side) -> Self {
        self.first_attacker = side;
        self.attacker = side;
        self
    }

    #[must_use]
    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    #[must_use]
    pub fn combatants(&self) -> &[Combatant; 2] {
        &self.combatants
    }

    /// Side that attacks on the next turn.
    #[must_use]
    pub fn attacker(&self) -> Side {
        self.attacker
    }

    #[must_use]
    pub fn first_attacker(&self) -> Side {
        self.first_attacker
    }

    /// Turns played so far.
    #[must_use]
    pub fn turn(&self) -> u64 {
        self.turn
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Play one turn. Returns `None` once the match is over.
    pub fn step<S>(&mut self, range: DamageRange, source: &mut S) -> Option<TurnReport>
    where
        S: DamageSource + ?Sized,
    {
        if self.is_over() {
            return None;
        }
        Some(self.play_turn(range, source))
    }

    fn play_turn<S>(&mut self, range: DamageRange, source: &mut S) -> TurnReport
    where
        S: DamageSource + ?Sized,
    {
        let attacker = self.attacker;
        let defender = attacker.opponent();

        let mut damage = source.roll(range);
        if damage == 0 {
            log::warn!("damage source rolled 0 on turn {}; using 1", self.turn + 1);
            damage = 1;
        }

        self.turn += 1;
        let defender_health = self.combatants[defender.index()].apply_damage(damage);

        let report = TurnReport {
            turn: self.turn,
            attacker,
            defender,
            attacker_name: self.combatant(attacker).name().to_string(),
            defender_name: self.combatant(defender).name().to_string(),
            damage,
            attacker_health: self.combatant(attacker).health(),
            defender_health,
        };

        log::debug!(
            "turn {}: {} hits {} for {} ({} left)",
            report.turn,
            report.attacker_name,
            report.defender_name,
            damage,
            defender_health
        );

        if defender_health == 0 {
            self.winner = Some(attacker);
        } else {
            self.attacker = defender;
        }

        report
    }

    /// Play to the end, reporting every turn to `observer`.
    pub fn run<S, O>(mut self, range: DamageRange, mut source: S, mut observer: O) -> MatchOutcome
    where
        S: DamageSource,
        O: TurnObserver,
    {
        let mut log = Vec::new();

        let winner_side = loop {
            if let Some(winner) = self.winner {
                break winner;
            }
            let report = self.play_turn(range, &mut source);
            observer.on_turn(&report);
            log.push(report);
        };

        let outcome = MatchOutcome {
            winner_side,
            first_attacker: self.first_attacker,
            turns: self.turn,
            combatants: self.combatants,
            log,
        };
        observer.on_finish(&outcome);
        outcome
    }
}

/// Result of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner_side: Side,
    pub first_attacker: Side,
    /// Total turns played, counting both sides.
    pub turns: u64,
    /// Both combatants as they ended the match.
    pub combatants: [Combatant; 2],
    /// Every turn, in order.
    pub log: Vec<TurnReport>,
}

impl MatchOutcome {
    #[must_use]
    pub fn winner(&self) -> &Combatant {
        &self.combatants[self.winner_side.index()]
    }

    #[must_use]
    pub fn loser(&self) -> &Combatant {
        &self.combatants[self.winner_side.opponent().index()]
    }

    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner_side == side
    }

    /// Number of attacks made by `side`.
    #[must_use]
    pub fn attacks_by(&self, side: Side) -> usize {
        self.log.iter().filter(|r| r.attacker == side).count()
    }
}

/// Validate the pair and config, then play the match to the end.
///
/// The first combatant of `pair` attacks first.
pub fn fight<S, O>(
    pair: [Combatant; 2],
    config: &BattleConfig,
    source: S,
    observer: O,
) -> Result<MatchOutcome>
where
    S: DamageSource,
    O: TurnObserver,
{
    config.validate()?;
    let game = Match::new(pair)?;
    Ok(game.run(config.damage, source, observer))
}
