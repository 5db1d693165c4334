//! Exportable view of a [`GameState`].
//!
//! Records serialize as positional arrays so the JSON export reads
//! `{"Red": [[2, 2], "live", "Axe", 3, 1]}`.

use std::collections::BTreeMap;

use super::{GameState, KnightStatus};

/// `[position-or-null, status, held-item-name-or-null, attack, defense]`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnightRecord(
    pub Option<[i32; 2]>,
    pub KnightStatus,
    pub Option<String>,
    pub u32,
    pub u32,
);

impl KnightRecord {
    pub fn position(&self) -> Option<[i32; 2]> {
        self.0
    }

    pub fn status(&self) -> KnightStatus {
        self.1
    }

    pub fn item(&self) -> Option<&str> {
        self.2.as_deref()
    }

    pub fn attack(&self) -> u32 {
        self.3
    }

    pub fn defense(&self) -> u32 {
        self.4
    }
}

/// `[position-or-null, equipped]`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRecord(pub Option<[i32; 2]>, pub bool);

impl ItemRecord {
    pub fn position(&self) -> Option<[i32; 2]> {
        self.0
    }

    pub fn is_equipped(&self) -> bool {
        self.1
    }
}

/// Knights keyed by color and items keyed by name.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub knights: BTreeMap<String, KnightRecord>,
    pub items: BTreeMap<String, ItemRecord>,
}

impl GameSnapshot {
    /// Reads the state without mutating it. Callable at any point of a game.
    pub fn capture(state: &GameState) -> Self {
        let knights = state
            .knights
            .iter()
            .map(|knight| {
                let item_name = knight
                    .item
                    .and_then(|id| state.item(id))
                    .map(|item| item.name.clone());
                let stats = knight.combat_stats(&state.items);
                let record = KnightRecord(
                    knight.position.map(|position| position.to_pair()),
                    knight.status,
                    item_name,
                    stats.attack,
                    stats.defense,
                );
                (knight.color.clone(), record)
            })
            .collect();

        let items = state
            .items
            .iter()
            .map(|item| {
                let position = state.item_position(item.id).map(|p| p.to_pair());
                (item.name.clone(), ItemRecord(position, item.is_equipped()))
            })
            .collect();

        Self { knights, items }
    }

    pub fn knight(&self, color: &str) -> Option<&KnightRecord> {
        self.knights.get(color)
    }

    pub fn item(&self, name: &str) -> Option<&ItemRecord> {
        self.items.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Scenario;
    use crate::state::{ItemId, ItemLocation, KnightId, Position};

    #[test]
    fn initial_snapshot_lists_everything() {
        let state = GameState::from_scenario(&Scenario::canonical()).unwrap();
        let snapshot = state.snapshot();

        assert_eq!(
            snapshot.knight("Blue"),
            Some(&KnightRecord(Some([7, 0]), KnightStatus::Live, None, 1, 1))
        );
        assert_eq!(snapshot.item("Helmet"), Some(&ItemRecord(Some([5, 5]), false)));
        assert_eq!(snapshot.knights.len(), 4);
        assert_eq!(snapshot.items.len(), 4);
    }

    #[test]
    fn held_item_follows_holder_and_drowned_knight_has_no_position() {
        let mut state = GameState::from_scenario(&Scenario::canonical()).unwrap();
        state.items.get_mut(ItemId::DAGGER).unwrap().location = ItemLocation::Held(KnightId('R'));
        state.knights.get_mut(KnightId('R')).unwrap().item = Some(ItemId::DAGGER);
        state
            .knights
            .get_mut(KnightId('Y'))
            .unwrap()
            .drown(Position::new(-1, 7));

        let snapshot = GameSnapshot::capture(&state);
        let red = snapshot.knight("Red").unwrap();
        assert_eq!(red.item(), Some("Dagger"));
        assert_eq!(red.attack(), 2);
        assert_eq!(snapshot.item("Dagger"), Some(&ItemRecord(Some([0, 0]), true)));

        let yellow = snapshot.knight("Yellow").unwrap();
        assert_eq!(yellow.position(), None);
        assert_eq!(yellow.status(), KnightStatus::Drowned);
        assert_eq!((yellow.attack(), yellow.defense()), (0, 0));
    }
}
