//! Knight state and the knight registry.

use arrayvec::ArrayVec;

use super::{ItemId, ItemsState, KnightId, Position};
use crate::config::GameConfig;
use crate::stats::CombatStats;

/// Life-cycle status of a knight. `Dead` and `Drowned` are terminal.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum KnightStatus {
    #[default]
    Live,
    Dead,
    Drowned,
}

impl KnightStatus {
    #[inline]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }
}

/// Complete knight state.
///
/// # Invariants
///
/// - `position` is `None` iff `status == Drowned`
/// - `item` is `None` whenever `status` is not `Live`
/// - `drowned_at` is only set for drowned knights and is always off the board
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnightState {
    pub id: KnightId,
    pub color: String,
    pub position: Option<Position>,
    /// Off-board coordinate the knight stepped onto when it drowned.
    pub drowned_at: Option<Position>,
    pub item: Option<ItemId>,
    pub base: CombatStats,
    pub status: KnightStatus,
}

impl KnightState {
    /// Creates a live knight with base stats and no item.
    pub fn new(id: KnightId, color: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            color: color.into(),
            position: Some(position),
            drowned_at: None,
            item: None,
            base: CombatStats::new(GameConfig::BASE_ATTACK, GameConfig::BASE_DEFENSE),
            status: KnightStatus::Live,
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }

    /// Effective stats: base plus held item bonus while live, zero otherwise.
    pub fn combat_stats(&self, items: &ItemsState) -> CombatStats {
        if !self.is_live() {
            return CombatStats::ZERO;
        }

        match self.item.and_then(|id| items.get(id)) {
            Some(item) => self.base + item.bonus,
            None => self.base,
        }
    }

    pub fn total_attack(&self, items: &ItemsState) -> u32 {
        self.combat_stats(items).attack
    }

    pub fn total_defense(&self, items: &ItemsState) -> u32 {
        self.combat_stats(items).defense
    }

    /// Marks the knight dead and hands back the item it was holding.
    ///
    /// The position is kept: a dead knight stays where it fell.
    pub fn kill(&mut self) -> Option<ItemId> {
        self.status = KnightStatus::Dead;
        self.item.take()
    }

    /// Marks the knight drowned at `off_board` and hands back its item.
    pub fn drown(&mut self, off_board: Position) -> Option<ItemId> {
        self.status = KnightStatus::Drowned;
        self.position = None;
        self.drowned_at = Some(off_board);
        self.item.take()
    }
}

/// Knight registry, the authoritative owner of knight state.
///
/// Keeps setup order so that iteration (and therefore every export) is stable.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnightsState {
    knights: ArrayVec<KnightState, { GameConfig::MAX_KNIGHTS }>,
}

impl KnightsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: KnightId) -> Option<&KnightState> {
        self.knights.iter().find(|knight| knight.id == id)
    }

    pub fn get_mut(&mut self, id: KnightId) -> Option<&mut KnightState> {
        self.knights.iter_mut().find(|knight| knight.id == id)
    }

    pub fn contains(&self, id: KnightId) -> bool {
        self.get(id).is_some()
    }

    /// Adds a knight. Returns it back when the registry is full.
    pub(crate) fn try_push(&mut self, knight: KnightState) -> Result<(), KnightState> {
        self.knights.try_push(knight).map_err(|err| err.element())
    }

    pub fn iter(&self) -> impl Iterator<Item = &KnightState> {
        self.knights.iter()
    }

    pub fn live(&self) -> impl Iterator<Item = &KnightState> {
        self.knights.iter().filter(|knight| knight.is_live())
    }

    pub fn len(&self) -> usize {
        self.knights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knights.is_empty()
    }
}
