//! The arena: draws a pair, runs the match, keeps score.

use std::collections::BTreeMap;

use super::record::{MatchRecord, DAMAGE_STREAM, SELECTION_STREAM};
use crate::combat::{Match, TurnObserver};
use crate::core::{BattleConfig, BattleRng, Result};
use crate::roster::Roster;

/// Runs seeded matches against a roster.
///
/// Each match gets its own seed forked from the config's root seed, so a
/// series is reproducible end to end and any single match can be replayed
/// from its record.
///
/// ```
/// use pet_battle::arena::Arena;
/// use pet_battle::combat::NoopObserver;
/// use pet_battle::core::BattleConfig;
/// use pet_battle::roster::Roster;
///
/// let mut arena = Arena::new(BattleConfig::new().with_seed(9), Roster::default()).unwrap();
/// let record = arena.run_match(NoopObserver).unwrap();
///
/// assert_eq!(record.loser().name(), record.turns.last().unwrap().defender_name);
/// assert!(record.verify().unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct Arena {
    config: BattleConfig,
    roster: Roster,
    seeds: BattleRng,
    matches_played: u32,
}

impl Arena {
    pub fn new(config: BattleConfig, roster: Roster) -> Result<Self> {
        config.validate()?;
        roster.validate()?;
        let seeds = BattleRng::new(config.seed);
        Ok(Self {
            config,
            roster,
            seeds,
            matches_played: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn matches_played(&self) -> u32 {
        self.matches_played
    }

    /// Draw a fresh pair and fight to the end.
    pub fn run_match<O: TurnObserver>(&mut self, observer: O) -> Result<MatchRecord> {
        let seed = self.seeds.fork().seed();
        let record = play_seeded(seed, &self.config, &self.roster, observer)?;
        self.matches_played += 1;
        Ok(record)
    }

    /// Play `count` matches back to back, sharing one observer.
    pub fn run_series<O: TurnObserver>(
        &mut self,
        count: u32,
        mut observer: O,
    ) -> Result<SeriesSummary> {
        let mut summary = SeriesSummary::default();
        for _ in 0..count {
            let record = self.run_match(&mut observer)?;
            summary.push(record);
        }
        log::info!(
            "series of {} finished; leader: {:?}",
            count,
            summary.leader()
        );
        Ok(summary)
    }
}

/// Play a single match from an explicit seed.
///
/// The pair is drawn from the seed's `selection` stream and damage comes from
/// its `damage` stream. The first drawn pet attacks first.
pub fn play_seeded<O: TurnObserver>(
    seed: u64,
    config: &BattleConfig,
    roster: &Roster,
    observer: O,
) -> Result<MatchRecord> {
    config.validate()?;
    roster.validate()?;
    let root = BattleRng::new(seed);

    let mut selection = root.for_context(SELECTION_STREAM);
    let pair = roster.draw_pair(&mut selection, config.max_health)?;
    log::debug!(
        "match {:#x}: {} -vs- {}",
        seed,
        pair[0].title(),
        pair[1].title()
    );

    let damage = root.for_context(DAMAGE_STREAM);
    let outcome = Match::new(pair.clone())?.run(config.damage, damage, observer);
    log::info!(
        "{} beat {} in {} turns",
        outcome.winner().name(),
        outcome.loser().name(),
        outcome.turns
    );

    Ok(MatchRecord::from_outcome(seed, config.clone(), pair, outcome))
}

/// Results of a run of matches.
#[derive(Clone, Debug, Default)]
pub struct SeriesSummary {
    records: Vec<MatchRecord>,
    wins: BTreeMap<String, u32>,
}

impl SeriesSummary {
    fn push(&mut self, record: MatchRecord) {
        *self.wins.entry(record.winner().name().to_string()).or_insert(0) += 1;
        self.records.push(record);
    }

    #[must_use]
    pub fn matches(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    /// Wins per pet name, alphabetical.
    #[must_use]
    pub fn wins(&self) -> &BTreeMap<String, u32> {
        &self.wins
    }

    #[must_use]
    pub fn wins_for(&self, name: &str) -> u32 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    /// Pet with the most wins. Ties go to the alphabetically first name.
    #[must_use]
    pub fn leader(&self) -> Option<(&str, u32)> {
        self.wins
            .iter()
            .fold(None::<(&str, u32)>, |best, (name, &wins)| match best {
                Some((_, top)) if top >= wins => best,
                _ => Some((name.as_str(), wins)),
            })
    }
}
