//! Authoritative game state representation.
//!
//! This module owns the data structures that describe knights, items and the
//! board, plus the setup path from a [`Scenario`]. Callers clone or query this
//! state but mutate it exclusively through the engine.
pub mod error;
pub mod snapshot;
pub mod types;

pub use error::InitializationError;
pub use snapshot::{GameSnapshot, ItemRecord, KnightRecord};
pub use types::{
    Board, BoardError, Cell, ItemId, ItemLocation, ItemState, ItemsState, KnightId, KnightState,
    KnightStatus, KnightsState, Position,
};

use crate::config::GameConfig;
use crate::env::Scenario;

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Number of moves resolved so far.
    pub turn: u64,
    /// Knight registry (single source of truth for knights).
    pub knights: KnightsState,
    /// Item registry (single source of truth for items).
    pub items: ItemsState,
    /// Cell occupancy and the items lying on each cell.
    pub board: Board,
}

impl GameState {
    /// Creates an empty state with no entities.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the starting state for a scenario.
    ///
    /// Every knight becomes the occupant of its start cell and every item is
    /// appended to its start cell's list. Two items may share a cell; two
    /// knights may not.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, InitializationError> {
        let mut state = Self::empty();

        for spec in &scenario.knights {
            let id = KnightId::from_color(&spec.color).ok_or_else(|| {
                InitializationError::InvalidName {
                    name: spec.color.clone(),
                }
            })?;
            if state.knights.contains(id) {
                return Err(InitializationError::DuplicateKnight { knight: id });
            }
            if let Some(occupant) = state.board.occupant(spec.position)? {
                return Err(InitializationError::PositionOccupied {
                    position: spec.position,
                    occupant,
                    knight: id,
                });
            }

            state
                .knights
                .try_push(KnightState::new(id, spec.color.clone(), spec.position))
                .map_err(|_| InitializationError::KnightListFull {
                    max: GameConfig::MAX_KNIGHTS,
                })?;
            state.board.place_knight(spec.position, id)?;
        }

        for spec in &scenario.items {
            let id = ItemId::from_name(&spec.name).ok_or_else(|| InitializationError::InvalidName {
                name: spec.name.clone(),
            })?;
            if state.items.contains(id) {
                return Err(InitializationError::DuplicateItem { item: id });
            }
            // Validate the position before touching the registry.
            state.board.cell_at(spec.position)?;

            state
                .items
                .try_push(ItemState::new(
                    id,
                    spec.name.clone(),
                    spec.bonus,
                    ItemLocation::Ground(spec.position),
                ))
                .map_err(|_| InitializationError::ItemListFull {
                    max: GameConfig::MAX_ITEMS,
                })?;
            state.board.add_item(spec.position, id)?;
        }

        Ok(state)
    }

    pub fn knight(&self, id: KnightId) -> Option<&KnightState> {
        self.knights.get(id)
    }

    pub fn item(&self, id: ItemId) -> Option<&ItemState> {
        self.items.get(id)
    }

    /// Total attack of a knight (0 for unknown or terminal knights).
    pub fn total_attack(&self, id: KnightId) -> u32 {
        self.knight(id)
            .map_or(0, |knight| knight.total_attack(&self.items))
    }

    /// Total defense of a knight (0 for unknown or terminal knights).
    pub fn total_defense(&self, id: KnightId) -> u32 {
        self.knight(id)
            .map_or(0, |knight| knight.total_defense(&self.items))
    }

    /// Current position of an item: its cell when lying, its holder's cell when held.
    pub fn item_position(&self, id: ItemId) -> Option<Position> {
        let item = self.item(id)?;
        match item.location {
            ItemLocation::Ground(position) => Some(position),
            ItemLocation::Held(holder) => self.knight(holder)?.position,
        }
    }

    /// Returns true when at most one knight is still live.
    pub fn is_game_over(&self) -> bool {
        self.knights.live().count() <= 1
    }

    /// Captures the exportable view of this state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    /// Computes a SHA-256 digest of the complete state.
    ///
    /// Two states compare equal iff their roots match, which makes the root a
    /// cheap way to confirm that a replay reproduced the same board.
    ///
    /// Requires the `serde` feature.
    #[cfg(feature = "serde")]
    pub fn compute_state_root(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        // bincode serialization is deterministic and consistent
        if let Ok(bytes) = bincode::serialize(self) {
            hasher.update(&bytes);
        }
        hasher.finalize().into()
    }
}
