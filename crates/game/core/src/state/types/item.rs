//! Item state and the item registry.
//!
//! An item is either lying on a cell or held by exactly one knight. Held
//! items carry no coordinates of their own; their position is the holder's.

use arrayvec::ArrayVec;

use super::{ItemId, KnightId, Position};
use crate::config::GameConfig;
use crate::stats::StatBonus;

/// Where an item currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemLocation {
    /// Lying unclaimed on a cell.
    Ground(Position),
    /// Equipped by a knight.
    Held(KnightId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub id: ItemId,
    pub name: String,
    pub bonus: StatBonus,
    pub location: ItemLocation,
}

impl ItemState {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        bonus: StatBonus,
        location: ItemLocation,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            bonus,
            location,
        }
    }

    #[inline]
    pub fn is_equipped(&self) -> bool {
        matches!(self.location, ItemLocation::Held(_))
    }

    pub fn holder(&self) -> Option<KnightId> {
        match self.location {
            ItemLocation::Held(knight) => Some(knight),
            ItemLocation::Ground(_) => None,
        }
    }
}

/// Item registry, the authoritative owner of item state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemsState {
    items: ArrayVec<ItemState, { GameConfig::MAX_ITEMS }>,
}

impl ItemsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemState> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut ItemState> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Adds an item. Returns it back when the registry is full.
    pub(crate) fn try_push(&mut self, item: ItemState) -> Result<(), ItemState> {
        self.items.try_push(item).map_err(|err| err.element())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemState> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
