//! Pet roster: species catalogue and pair selection.
//!
//! A match starts by drawing two distinct pets from a `Roster`. The default
//! roster holds the four house pets; callers can build their own.

pub mod registry;
pub mod species;

pub use registry::{PetEntry, Roster};
pub use species::Species;
