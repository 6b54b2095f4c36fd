//! Pet species and their pictograms.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::BattleError;

/// Every species a pet can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cat,
    Fish,
    Owl,
    Snake,
    Bat,
    Monkey,
    Pig,
    Mouse,
    Bird,
    Cthulhu,
    Fox,
}

impl Species {
    pub const ALL: [Species; 11] = [
        Species::Cat,
        Species::Fish,
        Species::Owl,
        Species::Snake,
        Species::Bat,
        Species::Monkey,
        Species::Pig,
        Species::Mouse,
        Species::Bird,
        Species::Cthulhu,
        Species::Fox,
    ];

    /// ASCII pictogram shown next to the pet's name.
    #[must_use]
    pub const fn pic(self) -> &'static str {
        match self {
            Species::Cat => "=^..^=",
            Species::Fish => "<`)))><",
            Species::Owl => "{O,o}",
            Species::Snake => "_/\\__/\\_/--{ :>~",
            Species::Bat => "/|\\^..^/|\\",
            Species::Monkey => "@('_')@",
            Species::Pig => "^(*(oo)*)^",
            Species::Mouse => "<:3 )~~~",
            Species::Bird => ",(u°)>",
            Species::Cthulhu => "^(;,;)^",
            Species::Fox => "-^^,--,~",
        }
    }

    /// Lowercase key, as used in roster definitions.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Species::Cat => "cat",
            Species::Fish => "fish",
            Species::Owl => "owl",
            Species::Snake => "snake",
            Species::Bat => "bat",
            Species::Monkey => "monkey",
            Species::Pig => "pig",
            Species::Mouse => "mouse",
            Species::Bird => "bird",
            Species::Cthulhu => "cthulhu",
            Species::Fox => "fox",
        }
    }
}

/// Capitalized label, e.g. "Cat".
impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = self.key();
        let mut chars = key.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for Species {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Species::ALL
            .into_iter()
            .find(|species| species.key() == wanted)
            .ok_or_else(|| BattleError::UnknownSpecies(s.to_string()))
    }
}
