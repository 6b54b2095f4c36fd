//! Attack phrases for narrating a turn.
//!
//! Pure lookup, kept apart from damage so the loop never touches strings.

use crate::core::BattleRng;

pub const ATTACK_PHRASES: [&str; 8] = [
    "nips at",
    "takes a swipe at",
    "glares sternly at",
    "ferociously smacks",
    "savagely boofs",
    "is awfully mean to",
    "can't even believe",
    "throws mad shade at",
];

/// Phrase at `index`, wrapping past the end.
#[must_use]
pub fn attack_phrase(index: usize) -> &'static str {
    ATTACK_PHRASES[index % ATTACK_PHRASES.len()]
}

/// Uniformly chosen phrase.
pub fn pick_phrase(rng: &mut BattleRng) -> &'static str {
    attack_phrase(rng.gen_index(ATTACK_PHRASES.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_phrase_wraps() {
        assert_eq!(attack_phrase(0), "nips at");
        assert_eq!(attack_phrase(7), "throws mad shade at");
        assert_eq!(attack_phrase(8), "nips at");
    }

    #[test]
    fn test_pick_phrase_is_seeded() {
        let mut a = BattleRng::new(3);
        let mut b = BattleRng::new(3);
        for _ in 0..20 {
            let phrase = pick_phrase(&mut a);
            assert_eq!(phrase, pick_phrase(&mut b));
            assert!(ATTACK_PHRASES.contains(&phrase));
        }
    }
}
