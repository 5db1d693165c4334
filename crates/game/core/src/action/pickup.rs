//! Item pickup.
//!
//! A knight that steps onto a cell while empty-handed takes one item. When
//! several items lie there, the [`PickupPolicy`] decides which.

use arrayvec::ArrayVec;

use super::MoveError;
use crate::config::GameConfig;
use crate::state::{GameState, ItemId, ItemLocation, KnightId, Position};

/// Priority of a single item. Higher wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupRank {
    pub item: ItemId,
    pub priority: u8,
}

impl PickupRank {
    pub const fn new(item: ItemId, priority: u8) -> Self {
        Self { item, priority }
    }
}

/// Ordered item priorities.
///
/// Items missing from the policy rank 0. Among equally ranked items the one
/// listed first on the cell is taken.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PickupPolicy {
    ranks: ArrayVec<PickupRank, { GameConfig::MAX_ITEMS }>,
}

impl PickupPolicy {
    /// Builds a policy from explicit ranks. Ranks past `MAX_ITEMS` are ignored.
    pub fn new(ranks: impl IntoIterator<Item = PickupRank>) -> Self {
        Self {
            ranks: ranks.into_iter().take(GameConfig::MAX_ITEMS).collect(),
        }
    }

    /// Axe > MagicStaff > Dagger > Helmet.
    pub fn canonical() -> Self {
        Self::new([
            PickupRank::new(ItemId::AXE, 4),
            PickupRank::new(ItemId::MAGIC_STAFF, 3),
            PickupRank::new(ItemId::DAGGER, 2),
            PickupRank::new(ItemId::HELMET, 1),
        ])
    }

    pub fn ranks(&self) -> &[PickupRank] {
        &self.ranks
    }

    pub fn priority(&self, item: ItemId) -> u8 {
        self.ranks
            .iter()
            .find(|rank| rank.item == item)
            .map_or(0, |rank| rank.priority)
    }

    /// Chooses the item to take from `candidates`, in cell order.
    pub fn select(&self, candidates: &[ItemId]) -> Option<ItemId> {
        let mut best: Option<(ItemId, u8)> = None;
        for &item in candidates {
            let priority = self.priority(item);
            if best.is_none_or(|(_, current)| priority > current) {
                best = Some((item, priority));
            }
        }
        best.map(|(item, _)| item)
    }
}

impl Default for PickupPolicy {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Moves the chosen item from the cell at `position` into the knight's hand.
pub(crate) fn pick_up(
    state: &mut GameState,
    knight: KnightId,
    position: Position,
    policy: &PickupPolicy,
) -> Result<Option<ItemId>, MoveError> {
    let Some(item) = policy.select(state.board.cell_at(position)?.items()) else {
        return Ok(None);
    };

    state.board.remove_item(position, item)?;
    state
        .items
        .get_mut(item)
        .ok_or(MoveError::UnknownItem { item })?
        .location = ItemLocation::Held(knight);
    state
        .knights
        .get_mut(knight)
        .ok_or(MoveError::UnknownKnight { knight })?
        .item = Some(item);

    Ok(Some(item))
}

/// Puts an item back on the board at `position`.
///
/// The caller has already cleared the former holder's reference.
pub(crate) fn drop_item(
    state: &mut GameState,
    item: ItemId,
    position: Position,
) -> Result<(), MoveError> {
    state
        .items
        .get_mut(item)
        .ok_or(MoveError::UnknownItem { item })?
        .location = ItemLocation::Ground(position);
    state.board.add_item(position, item)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_policy_prefers_axe() {
        let policy = PickupPolicy::canonical();

        assert_eq!(
            policy.select(&[ItemId::DAGGER, ItemId::AXE]),
            Some(ItemId::AXE)
        );
        assert_eq!(
            policy.select(&[ItemId::HELMET, ItemId::MAGIC_STAFF, ItemId::DAGGER]),
            Some(ItemId::MAGIC_STAFF)
        );
        assert_eq!(policy.select(&[]), None);
    }

    #[test]
    fn ties_keep_first_listed_item() {
        let policy = PickupPolicy::canonical();
        let shield = ItemId('S');
        let sword = ItemId('W');

        assert_eq!(policy.priority(shield), 0);
        assert_eq!(policy.select(&[shield, sword]), Some(shield));
        assert_eq!(policy.select(&[sword, shield]), Some(sword));
    }

    #[test]
    fn custom_policy_reorders_choices() {
        let policy = PickupPolicy::new([
            PickupRank::new(ItemId::HELMET, 9),
            PickupRank::new(ItemId::AXE, 1),
        ]);

        assert_eq!(
            policy.select(&[ItemId::AXE, ItemId::HELMET]),
            Some(ItemId::HELMET)
        );
        assert_eq!(policy.ranks().len(), 2);
    }
}
