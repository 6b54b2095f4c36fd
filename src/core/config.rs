//! Match configuration.
//!
//! - `DamageRange`: inclusive bounds for a single hit
//! - `BattleConfig`: starting health, damage range, and arena seed
//!
//! Both are validated on construction so the combat loop can assume a
//! well-formed range.

use serde::{Deserialize, Serialize};

use super::error::{BattleError, Result};

/// Starting (and maximum) health of a freshly drawn pet.
pub const MAX_HEALTH: u32 = 100;

/// Default damage bounds of a single attack.
pub const DEFAULT_DAMAGE: (u32, u32) = (10, 30);

/// Inclusive damage bounds with `1 <= min <= max`.
///
/// The lower bound of 1 is what guarantees every match ends: each turn
/// takes at least one point off the defender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct DamageRange {
    min: u32,
    max: u32,
}

impl DamageRange {
    /// Create a validated range.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min == 0 || min > max {
            return Err(BattleError::InvalidDamageRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// A range that always yields `value`.
    pub fn fixed(value: u32) -> Result<Self> {
        Self::new(value, value)
    }

    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    #[must_use]
    pub fn contains(self, damage: u32) -> bool {
        (self.min..=self.max).contains(&damage)
    }

    /// Upper bound on how many attacks either side can make before the
    /// match ends, given both starting healths.
    #[must_use]
    pub fn max_attacks(self, health_a: u32, health_b: u32) -> u32 {
        health_a.max(health_b).div_ceil(self.min)
    }
}

impl Default for DamageRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_DAMAGE.0,
            max: DEFAULT_DAMAGE.1,
        }
    }
}

impl TryFrom<(u32, u32)> for DamageRange {
    type Error = BattleError;

    fn try_from((min, max): (u32, u32)) -> Result<Self> {
        Self::new(min, max)
    }
}

impl From<DamageRange> for (u32, u32) {
    fn from(range: DamageRange) -> Self {
        (range.min, range.max)
    }
}

impl std::fmt::Display for DamageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Configuration for an arena.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Health every drawn pet starts with (default: 100).
    pub max_health: u32,

    /// Damage bounds for every attack (default: [10, 30]).
    pub damage: DamageRange,

    /// Root seed. Same seed, same matches.
    pub seed: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_health: MAX_HEALTH,
            damage: DamageRange::default(),
            seed: 42,
        }
    }
}

impl BattleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting health of drawn pets.
    #[must_use]
    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    /// Set the damage range.
    #[must_use]
    pub fn with_damage(mut self, damage: DamageRange) -> Self {
        self.damage = damage;
        self
    }

    /// Set the root seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the config before any match is played.
    ///
    /// `DamageRange` is valid by construction; only the health needs a look.
    pub fn validate(&self) -> Result<()> {
        if self.max_health == 0 {
            return Err(BattleError::ZeroMaxHealth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_range_bounds() {
        let range = DamageRange::new(10, 30).unwrap();
        assert_eq!(range.min(), 10);
        assert_eq!(range.max(), 30);
        assert!(range.contains(10));
        assert!(range.contains(30));
        assert!(!range.contains(9));
        assert!(!range.contains(31));
        assert_eq!(range.to_string(), "[10, 30]");
    }

    #[test]
    fn test_damage_range_rejects_zero_min() {
        let err = DamageRange::new(0, 5).unwrap_err();
        assert!(matches!(err, BattleError::InvalidDamageRange { min: 0, max: 5 }));
    }

    #[test]
    fn test_damage_range_rejects_inverted() {
        assert!(DamageRange::new(30, 10).is_err());
        assert!(DamageRange::fixed(0).is_err());
        assert!(DamageRange::fixed(25).is_ok());
    }

    #[test]
    fn test_max_attacks() {
        let range = DamageRange::new(10, 30).unwrap();
        assert_eq!(range.max_attacks(100, 15), 10);
        assert_eq!(range.max_attacks(15, 15), 2);

        let range = DamageRange::fixed(25).unwrap();
        assert_eq!(range.max_attacks(100, 100), 4);
    }

    #[test]
    fn test_damage_range_serde_validates() {
        let json = serde_json::to_string(&DamageRange::default()).unwrap();
        assert_eq!(json, "[10,30]");

        let back: DamageRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DamageRange::default());

        assert!(serde_json::from_str::<DamageRange>("[0,30]").is_err());
    }

    #[test]
    fn test_battle_config_defaults() {
        let config = BattleConfig::default();
        assert_eq!(config.max_health, MAX_HEALTH);
        assert_eq!(config.damage, DamageRange::new(10, 30).unwrap());
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_battle_config_builder() {
        let config = BattleConfig::new()
            .with_max_health(50)
            .with_damage(DamageRange::fixed(5).unwrap())
            .with_seed(7);

        assert_eq!(config.max_health, 50);
        assert_eq!(config.damage.min(), 5);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_battle_config_zero_health() {
        let config = BattleConfig::new().with_max_health(0);
        assert!(matches!(config.validate(), Err(BattleError::ZeroMaxHealth)));
    }
}
