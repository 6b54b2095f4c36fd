//! Per-turn reports and the observers that receive them.
//!
//! Observers are sinks: the loop hands them a report after every turn and the
//! outcome at the end, and nothing they do feeds back into the match.

use serde::{Deserialize, Serialize};

use super::fight::MatchOutcome;
use super::flavor::pick_phrase;
use crate::core::{BattleRng, Side};

/// What happened in one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Turn number, starting at 1.
    pub turn: u64,
    pub attacker: Side,
    pub defender: Side,
    pub attacker_name: String,
    pub defender_name: String,
    /// Damage dealt this turn.
    pub damage: u32,
    /// Attacker's health, unchanged by its own attack.
    pub attacker_health: u32,
    /// Defender's health after the hit.
    pub defender_health: u32,
}

impl TurnReport {
    /// Did this turn end the match?
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.defender_health == 0
    }
}

/// Receives match progress.
pub trait TurnObserver {
    /// Called after every turn.
    fn on_turn(&mut self, report: &TurnReport);

    /// Called once when the match ends.
    fn on_finish(&mut self, _outcome: &MatchOutcome) {}
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl TurnObserver for NoopObserver {
    fn on_turn(&mut self, _report: &TurnReport) {}
}

/// Keeps every report.
impl TurnObserver for Vec<TurnReport> {
    fn on_turn(&mut self, report: &TurnReport) {
        self.push(report.clone());
    }
}

impl<O: TurnObserver + ?Sized> TurnObserver for &mut O {
    fn on_turn(&mut self, report: &TurnReport) {
        (**self).on_turn(report);
    }

    fn on_finish(&mut self, outcome: &MatchOutcome) {
        (**self).on_finish(outcome);
    }
}

/// Narrates the match through the `log` facade at `info` level.
///
/// Attack phrases come from the observer's own RNG stream, so narration can
/// never change a roll.
#[derive(Clone, Debug)]
pub struct LogObserver {
    flavor: BattleRng,
}

impl LogObserver {
    pub fn new(seed: u64) -> Self {
        Self {
            flavor: BattleRng::new(seed).for_context("flavor"),
        }
    }

    /// Render a turn as a sentence: "George savagely boofs Scaley for 23 (Scaley: 77)".
    pub fn narrate(&mut self, report: &TurnReport) -> String {
        format!(
            "{} {} {} for {} ({}: {})",
            report.attacker_name,
            pick_phrase(&mut self.flavor),
            report.defender_name,
            report.damage,
            report.defender_name,
            report.defender_health,
        )
    }
}

impl TurnObserver for LogObserver {
    fn on_turn(&mut self, report: &TurnReport) {
        let line = self.narrate(report);
        log::info!("turn {}: {}", report.turn, line);
    }

    fn on_finish(&mut self, outcome: &MatchOutcome) {
        let winner = outcome.winner();
        log::info!(
            "{} {} is victorious after {} turns",
            winner.title(),
            winner.species().pic(),
            outcome.turns
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::flavor::ATTACK_PHRASES;

    fn report(turn: u64, defender_health: u32) -> TurnReport {
        TurnReport {
            turn,
            attacker: Side::First,
            defender: Side::Second,
            attacker_name: "George".to_string(),
            defender_name: "Scaley".to_string(),
            damage: 23,
            attacker_health: 100,
            defender_health,
        }
    }

    #[test]
    fn test_is_final() {
        assert!(!report(1, 77).is_final());
        assert!(report(7, 0).is_final());
    }

    #[test]
    fn test_vec_records() {
        let mut log: Vec<TurnReport> = Vec::new();
        log.on_turn(&report(1, 77));
        log.on_turn(&report(2, 54));

        assert_eq!(log.len(), 2);
        assert_eq!(log[1].turn, 2);
    }

    #[test]
    fn test_narrate() {
        let mut observer = LogObserver::new(1);
        let line = observer.narrate(&report(1, 77));

        assert!(line.starts_with("George "));
        assert!(line.ends_with(" Scaley for 23 (Scaley: 77)"));
        assert!(ATTACK_PHRASES.iter().any(|phrase| line.contains(phrase)));
    }

    #[test]
    fn test_narrate_is_seeded() {
        let mut a = LogObserver::new(8);
        let mut b = LogObserver::new(8);
        for turn in 1..=5 {
            assert_eq!(a.narrate(&report(turn, 50)), b.narrate(&report(turn, 50)));
        }
    }
}
