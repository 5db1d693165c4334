use super::combat::{self, CombatReport};
use super::pickup;
use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Board, BoardError, GameState, ItemId, KnightId, KnightStatus, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("knight {knight} not found")]
    UnknownKnight { knight: KnightId },

    #[error("knight {knight} is {status} and cannot move")]
    KnightInactive {
        knight: KnightId,
        status: KnightStatus,
    },

    #[error("knight {knight} has no board position")]
    MissingPosition { knight: KnightId },

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("item {item} not found")]
    UnknownItem { item: ItemId },

    #[error("occupancy desync for knight {knight} at {position}")]
    OccupancyDesync { knight: KnightId, position: Position },

    #[error("item {item} is not where its holder says it is")]
    ItemDesync { item: ItemId },

    #[error("drowned knight {knight} still holds item {item}")]
    DrownedWithItem { knight: KnightId, item: ItemId },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        use MoveError::*;
        match self {
            UnknownKnight { .. } | KnightInactive { .. } => ErrorSeverity::Validation,
            MissingPosition { .. }
            | MoveError::Board(_)
            | UnknownItem { .. }
            | OccupancyDesync { .. }
            | ItemDesync { .. }
            | DrownedWithItem { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use MoveError::*;
        match self {
            UnknownKnight { .. } => "MOVE_UNKNOWN_KNIGHT",
            KnightInactive { .. } => "MOVE_KNIGHT_INACTIVE",
            MissingPosition { .. } => "MOVE_MISSING_POSITION",
            MoveError::Board(_) => "MOVE_BOARD",
            UnknownItem { .. } => "MOVE_UNKNOWN_ITEM",
            OccupancyDesync { .. } => "MOVE_OCCUPANCY_DESYNC",
            ItemDesync { .. } => "MOVE_ITEM_DESYNC",
            DrownedWithItem { .. } => "MOVE_DROWNED_WITH_ITEM",
        }
    }
}

/// Compass direction of a single step.
///
/// Parses from `N`/`S`/`E`/`W` or the full word, ignoring case.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CardinalDirection {
    #[strum(to_string = "N", serialize = "NORTH")]
    North,
    #[strum(to_string = "S", serialize = "SOUTH")]
    South,
    #[strum(to_string = "E", serialize = "EAST")]
    East,
    #[strum(to_string = "W", serialize = "WEST")]
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    /// Returns the (row, col) step. Row 0 is north.
    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (-1, 0),
            CardinalDirection::South => (1, 0),
            CardinalDirection::East => (0, 1),
            CardinalDirection::West => (0, -1),
        }
    }
}

/// One knight stepping one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub knight: KnightId,
    pub direction: CardinalDirection,
}

impl MoveAction {
    pub fn new(knight: KnightId, direction: CardinalDirection) -> Self {
        Self { knight, direction }
    }

    fn destination_from(&self, origin: Position) -> Position {
        let (d_row, d_col) = self.direction.delta();
        origin.offset(d_row, d_col)
    }
}

/// Everything a resolved move changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    pub knight: KnightId,
    pub direction: CardinalDirection,
    pub from: Position,
    /// Final position of the mover, `None` after drowning.
    pub to: Option<Position>,
    /// Status of the mover after the move.
    pub status: KnightStatus,
    pub picked_up: Option<ItemId>,
    /// Item left on the last valid cell by a drowning mover.
    pub dropped: Option<ItemId>,
    pub combat: Option<CombatReport>,
}

impl MoveOutcome {
    pub fn drowned(&self) -> bool {
        self.status == KnightStatus::Drowned
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    type Result = MoveOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let knight = state
            .knight(self.knight)
            .ok_or(MoveError::UnknownKnight {
                knight: self.knight,
            })?;

        if !knight.is_live() {
            return Err(MoveError::KnightInactive {
                knight: self.knight,
                status: knight.status,
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let knight = state
            .knight(self.knight)
            .ok_or(MoveError::UnknownKnight {
                knight: self.knight,
            })?;
        let from = knight.position.ok_or(MoveError::MissingPosition {
            knight: self.knight,
        })?;
        let empty_handed = knight.item.is_none();

        // Vacate
        if state.board.clear_knight(from)? != Some(self.knight) {
            return Err(MoveError::OccupancyDesync {
                knight: self.knight,
                position: from,
            });
        }

        let destination = self.destination_from(from);

        if !Board::contains(destination) {
            let dropped = state
                .knights
                .get_mut(self.knight)
                .ok_or(MoveError::UnknownKnight {
                    knight: self.knight,
                })?
                .drown(destination);
            // The item stays behind on the last cell the knight stood on.
            if let Some(item) = dropped {
                pickup::drop_item(state, item, from)?;
            }

            return Ok(MoveOutcome {
                knight: self.knight,
                direction: self.direction,
                from,
                to: None,
                status: KnightStatus::Drowned,
                picked_up: None,
                dropped,
                combat: None,
            });
        }

        state
            .knights
            .get_mut(self.knight)
            .ok_or(MoveError::UnknownKnight {
                knight: self.knight,
            })?
            .position = Some(destination);

        let picked_up = if empty_handed {
            pickup::pick_up(state, self.knight, destination, env.pickup_policy())?
        } else {
            None
        };

        let defender = state
            .board
            .occupant(destination)?
            .filter(|occupant| *occupant != self.knight)
            .filter(|occupant| state.knight(*occupant).is_some_and(|k| k.is_live()));
        let combat = match defender {
            Some(defender) => Some(combat::resolve_encounter(
                state,
                self.knight,
                defender,
                destination,
            )?),
            None => None,
        };

        let survivor = combat.map_or(self.knight, |report| report.winner);
        state.board.place_knight(destination, survivor)?;

        let status = state
            .knight(self.knight)
            .map(|knight| knight.status)
            .ok_or(MoveError::UnknownKnight {
                knight: self.knight,
            })?;

        Ok(MoveOutcome {
            knight: self.knight,
            direction: self.direction,
            from,
            to: Some(destination),
            status,
            picked_up,
            dropped: None,
            combat,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let knight = state
            .knight(self.knight)
            .ok_or(MoveError::UnknownKnight {
                knight: self.knight,
            })?;

        if knight.status == KnightStatus::Drowned {
            if let Some(item) = knight.item {
                return Err(MoveError::DrownedWithItem {
                    knight: self.knight,
                    item,
                });
            }
            return Ok(());
        }

        let position = knight.position.ok_or(MoveError::MissingPosition {
            knight: self.knight,
        })?;
        let occupant = state
            .board
            .occupant(position)?
            .and_then(|id| state.knight(id))
            .filter(|occupant| occupant.is_live() && occupant.position == Some(position));
        let Some(occupant) = occupant else {
            return Err(MoveError::OccupancyDesync {
                knight: self.knight,
                position,
            });
        };
        if knight.is_live() && occupant.id != self.knight {
            return Err(MoveError::OccupancyDesync {
                knight: self.knight,
                position,
            });
        }

        if let Some(item) = occupant.item {
            let holder = state
                .item(item)
                .ok_or(MoveError::UnknownItem { item })?
                .holder();
            if holder != Some(occupant.id) {
                return Err(MoveError::ItemDesync { item });
            }
        }

        Ok(())
    }
}
