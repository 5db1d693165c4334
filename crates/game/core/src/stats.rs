//! Combat statistics.
//!
//! Knights carry base stats; items carry flat bonuses. The effective values
//! are always recomputed from those two sources, never cached.

use core::ops::Add;

/// Flat bonus granted by an item while it is held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBonus {
    pub attack: u32,
    pub defense: u32,
}

impl StatBonus {
    pub const NONE: Self = Self {
        attack: 0,
        defense: 0,
    };

    pub const fn new(attack: u32, defense: u32) -> Self {
        Self { attack, defense }
    }
}

/// Attack and defense of a knight at a point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub attack: u32,
    pub defense: u32,
}

impl CombatStats {
    /// Stats of a knight that is out of play.
    pub const ZERO: Self = Self {
        attack: 0,
        defense: 0,
    };

    pub const fn new(attack: u32, defense: u32) -> Self {
        Self { attack, defense }
    }

    /// Attack as used by the fight comparison.
    pub fn attack_score(self) -> f64 {
        f64::from(self.attack)
    }

    /// Defense as used by the fight comparison.
    pub fn defense_score(self) -> f64 {
        f64::from(self.defense)
    }
}

impl Add<StatBonus> for CombatStats {
    type Output = CombatStats;

    fn add(self, bonus: StatBonus) -> CombatStats {
        CombatStats {
            attack: self.attack.saturating_add(bonus.attack),
            defense: self.defense.saturating_add(bonus.defense),
        }
    }
}
