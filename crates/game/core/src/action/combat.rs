//! Fight resolution.
//!
//! Fights are deterministic: the attacker wins iff its attack plus
//! [`GameConfig::TIE_BREAK`] exceeds the defender's defense.

use super::{MoveError, pickup};
use crate::config::GameConfig;
use crate::state::{GameState, ItemId, KnightId, Position};
use crate::stats::CombatStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FightResult {
    AttackerWins,
    DefenderWins,
}

/// Compares raw scores. Exposed separately so fractional inputs can be checked.
pub fn resolve_fight(attack: f64, defense: f64) -> FightResult {
    if attack + GameConfig::TIE_BREAK > defense {
        FightResult::AttackerWins
    } else {
        FightResult::DefenderWins
    }
}

pub fn fight(attacker: CombatStats, defender: CombatStats) -> FightResult {
    resolve_fight(attacker.attack_score(), defender.defense_score())
}

/// What happened when the mover met another knight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatReport {
    pub attacker: KnightId,
    pub defender: KnightId,
    pub winner: KnightId,
    pub loser: KnightId,
    /// Item the loser was holding, now lying on the contested cell.
    pub dropped: Option<ItemId>,
}

impl CombatReport {
    pub fn attacker_won(&self) -> bool {
        self.winner == self.attacker
    }
}

/// Fights it out on `position` and kills the loser.
///
/// Stats are read after any pickup the attacker made on arrival. The loser
/// keeps `position` as its final resting place; occupancy is left to the caller.
pub(crate) fn resolve_encounter(
    state: &mut GameState,
    attacker: KnightId,
    defender: KnightId,
    position: Position,
) -> Result<CombatReport, MoveError> {
    let attack = state
        .knight(attacker)
        .ok_or(MoveError::UnknownKnight { knight: attacker })?
        .combat_stats(&state.items);
    let defense = state
        .knight(defender)
        .ok_or(MoveError::UnknownKnight { knight: defender })?
        .combat_stats(&state.items);

    let (winner, loser) = match fight(attack, defense) {
        FightResult::AttackerWins => (attacker, defender),
        FightResult::DefenderWins => (defender, attacker),
    };

    let dropped = state
        .knights
        .get_mut(loser)
        .ok_or(MoveError::UnknownKnight { knight: loser })?
        .kill();
    if let Some(item) = dropped {
        pickup::drop_item(state, item, position)?;
    }

    Ok(CombatReport {
        attacker,
        defender,
        winner,
        loser,
        dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_break_favors_attacker_below_half_point() {
        assert_eq!(resolve_fight(2.0, 2.4), FightResult::AttackerWins);
        assert_eq!(resolve_fight(2.0, 2.5), FightResult::DefenderWins);
        assert_eq!(resolve_fight(1.0, 1.0), FightResult::AttackerWins);
    }

    #[test]
    fn fight_uses_attack_against_defense() {
        let plain = CombatStats::new(1, 1);
        let helmet = CombatStats::new(1, 2);

        assert_eq!(fight(plain, plain), FightResult::AttackerWins);
        assert_eq!(fight(plain, helmet), FightResult::DefenderWins);
        assert_eq!(fight(CombatStats::new(3, 1), helmet), FightResult::AttackerWins);
    }
}
