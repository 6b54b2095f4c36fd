//! Turn-based combat between two pets.
//!
//! - `fight`: the combat loop (`Match`, `MatchOutcome`, `fight`)
//! - `damage`: pluggable damage rolls (`DamageSource`)
//! - `report`: per-turn reports and observers (`TurnObserver`)
//! - `flavor`: attack phrases for narration

pub mod damage;
pub mod fight;
pub mod flavor;
pub mod report;

pub use damage::{DamageSource, FixedDamage, ScriptedDamage};
pub use fight::{fight, Match, MatchOutcome};
pub use flavor::{attack_phrase, pick_phrase, ATTACK_PHRASES};
pub use report::{LogObserver, NoopObserver, TurnObserver, TurnReport};
