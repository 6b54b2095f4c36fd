//! Seeded random source for damage rolls, pair draws, and flavor picks.
//!
//! Every random decision in a match comes from a `BattleRng`, so a seed fully
//! determines the pair drawn, every damage roll, and the winner.
//!
//! Independent concerns get independent streams via [`BattleRng::for_context`]:
//! drawing the pair never shifts the damage sequence, and flavor text never
//! shifts either.
//!
//! ```
//! use pet_battle::core::BattleRng;
//!
//! let root = BattleRng::new(7);
//! let mut damage = root.for_context("damage");
//! let mut again = BattleRng::new(7).for_context("damage");
//!
//! assert_eq!(damage.roll_inclusive(10..=30), again.roll_inclusive(10..=30));
//! ```

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

// FNV-1a over the context name. Stored records depend on these staying put.
const CONTEXT_OFFSET: u64 = 0xCBF2_9CE4_8422_2325;
const CONTEXT_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Deterministic ChaCha8 RNG with forking and named sub-streams.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off an independent stream.
    ///
    /// Successive forks of the same RNG get different, reproducible seeds.
    /// The arena forks once per match.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(GOLDEN_GAMMA));
        Self::new(fork_seed)
    }

    /// Derive a named stream from this RNG's seed.
    ///
    /// The same context always yields the same stream, regardless of how far
    /// this RNG has advanced.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mixed = context
            .bytes()
            .fold(self.seed ^ CONTEXT_OFFSET, |acc, byte| {
                (acc ^ u64::from(byte)).wrapping_mul(CONTEXT_PRIME)
            });
        Self::new(mixed.wrapping_mul(GOLDEN_GAMMA))
    }

    /// Uniform draw from an inclusive range.
    ///
    /// The range must be non-empty; callers pass a validated `DamageRange`.
    pub fn roll_inclusive(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Uniform index in `0..len`. `len` must be positive.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Draw two distinct indices in `0..len`, in draw order.
    ///
    /// Returns `None` when `len < 2`.
    pub fn sample_pair(&mut self, len: usize) -> Option<(usize, usize)> {
        if len < 2 {
            return None;
        }
        let first = self.gen_index(len);
        // Draw from the remaining len - 1 slots and skip over `first`.
        let mut second = self.gen_index(len - 1);
        if second >= first {
            second += 1;
        }
        Some((first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = BattleRng::new(42);
        let mut rng2 = BattleRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_inclusive(10..=30), rng2.roll_inclusive(10..=30));
        }
    }

    #[test]
    fn test_roll_inclusive_hits_both_bounds() {
        let mut rng = BattleRng::new(3);
        let rolls: Vec<_> = (0..500).map(|_| rng.roll_inclusive(1..=3)).collect();

        assert!(rolls.iter().all(|r| (1..=3).contains(r)));
        assert!(rolls.contains(&1));
        assert!(rolls.contains(&3));
    }

    #[test]
    fn test_roll_single_value_range() {
        let mut rng = BattleRng::new(9);
        for _ in 0..10 {
            assert_eq!(rng.roll_inclusive(25..=25), 25);
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = BattleRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.roll_inclusive(0..=1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.roll_inclusive(0..=1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_successive_forks_differ() {
        let mut rng = BattleRng::new(42);
        let a = rng.fork();
        let b = rng.fork();
        assert_ne!(a.seed(), b.seed());

        let mut again = BattleRng::new(42);
        assert_eq!(again.fork().seed(), a.seed());
    }

    #[test]
    fn test_context_streams_are_independent() {
        let rng = BattleRng::new(42);
        let mut selection = rng.for_context("selection");
        let mut damage = rng.for_context("damage");

        let seq1: Vec<_> = (0..10).map(|_| selection.roll_inclusive(0..=1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| damage.roll_inclusive(0..=1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_ignores_stream_position() {
        let fresh = BattleRng::new(42);
        let mut advanced = BattleRng::new(42);
        for _ in 0..50 {
            advanced.roll_inclusive(0..=10);
        }

        assert_eq!(
            fresh.for_context("damage").seed(),
            advanced.for_context("damage").seed()
        );
    }

    #[test]
    fn test_sample_pair_distinct() {
        let mut rng = BattleRng::new(11);
        for len in 2..8 {
            for _ in 0..50 {
                let (a, b) = rng.sample_pair(len).unwrap();
                assert_ne!(a, b);
                assert!(a < len && b < len);
            }
        }
    }

    #[test]
    fn test_sample_pair_too_small() {
        let mut rng = BattleRng::new(11);
        assert_eq!(rng.sample_pair(0), None);
        assert_eq!(rng.sample_pair(1), None);
    }

    #[test]
    fn test_context_seeds_are_pinned() {
        let rng = BattleRng::new(42);
        assert_eq!(rng.for_context("damage").seed(), 0x2B11_7A5B_93F4_53D6);
        assert_eq!(rng.for_context("selection").seed(), 0xCAF1_8FF8_39F0_0717);
    }

    #[test]
    fn test_context_depends_on_seed() {
        assert_ne!(
            BattleRng::new(1).for_context("damage").seed(),
            BattleRng::new(2).for_context("damage").seed()
        );
    }
}
