//! Arena: seeded matches drawn from a roster.
//!
//! The arena ties the pieces together the way a full game does: pick two
//! pets, let them fight, announce the winner, and go again if asked. Each
//! match yields a `MatchRecord` that can be stored and replayed.

mod record;
mod runner;

pub use record::MatchRecord;
pub use runner::{play_seeded, Arena, SeriesSummary};
