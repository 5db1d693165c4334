//! Setup errors.
//!
//! Raised while turning a [`crate::env::Scenario`] into a [`super::GameState`].

use crate::error::{ErrorSeverity, GameError};
use crate::state::{BoardError, ItemId, KnightId, Position};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// Names must start with an ASCII letter so a glyph can be derived.
    #[error("name {name:?} does not start with a letter")]
    InvalidName { name: String },

    #[error("knight {knight} is defined more than once")]
    DuplicateKnight { knight: KnightId },

    #[error("item {item} is defined more than once")]
    DuplicateItem { item: ItemId },

    #[error("too many knights (max: {max})")]
    KnightListFull { max: usize },

    #[error("too many items (max: {max})")]
    ItemListFull { max: usize },

    #[error("knights {occupant} and {knight} both start at {position}")]
    PositionOccupied {
        position: Position,
        occupant: KnightId,
        knight: KnightId,
    },

    #[error("invalid start position: {0}")]
    Board(#[from] BoardError),
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use InitializationError::*;
        match self {
            InvalidName { .. } => "INIT_INVALID_NAME",
            DuplicateKnight { .. } => "INIT_DUPLICATE_KNIGHT",
            DuplicateItem { .. } => "INIT_DUPLICATE_ITEM",
            KnightListFull { .. } => "INIT_KNIGHT_LIST_FULL",
            ItemListFull { .. } => "INIT_ITEM_LIST_FULL",
            PositionOccupied { .. } => "INIT_POSITION_OCCUPIED",
            Board(_) => "INIT_BOARD",
        }
    }
}
