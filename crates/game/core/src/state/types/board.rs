//! The fixed 8×8 board.
//!
//! Cells hold identifiers only. The registries in [`crate::state::GameState`]
//! own the knights and items; the board is an index into them.

use arrayvec::ArrayVec;

use super::{ItemId, KnightId, Position};
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

const SIZE: usize = GameConfig::BOARD_SIZE;

type CellItems = ArrayVec<ItemId, { GameConfig::MAX_ITEMS }>;

/// Errors raised by direct board access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    #[error("position {position} is outside the 8x8 board")]
    OutOfBounds { position: Position },

    #[error("cell {position} cannot hold more than {max} items")]
    CellFull { position: Position, max: usize },
}

impl GameError for BoardError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "BOARD_OUT_OF_BOUNDS",
            Self::CellFull { .. } => "BOARD_CELL_FULL",
        }
    }
}

/// A single board square.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    position: Position,
    occupant: Option<KnightId>,
    /// Items lying here, in the order they arrived.
    items: CellItems,
}

impl Cell {
    fn empty(position: Position) -> Self {
        Self {
            position,
            occupant: None,
            items: CellItems::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn occupant(&self) -> Option<KnightId> {
        self.occupant
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }
}

/// Fixed 8×8 matrix of cells indexed `[row][col]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: core::array::from_fn(|row| {
                core::array::from_fn(|col| Cell::empty(Position::new(row as i32, col as i32)))
            }),
        }
    }

    /// Returns true if the position lies on the board.
    pub fn contains(position: Position) -> bool {
        (0..SIZE as i32).contains(&position.row) && (0..SIZE as i32).contains(&position.col)
    }

    fn index(position: Position) -> Result<(usize, usize), BoardError> {
        if Self::contains(position) {
            Ok((position.row as usize, position.col as usize))
        } else {
            Err(BoardError::OutOfBounds { position })
        }
    }

    pub fn cell_at(&self, position: Position) -> Result<&Cell, BoardError> {
        let (row, col) = Self::index(position)?;
        Ok(&self.cells[row][col])
    }

    fn cell_at_mut(&mut self, position: Position) -> Result<&mut Cell, BoardError> {
        let (row, col) = Self::index(position)?;
        Ok(&mut self.cells[row][col])
    }

    pub fn occupant(&self, position: Position) -> Result<Option<KnightId>, BoardError> {
        self.cell_at(position).map(Cell::occupant)
    }

    /// Sets the occupant, replacing whoever was there.
    pub fn place_knight(&mut self, position: Position, knight: KnightId) -> Result<(), BoardError> {
        self.cell_at_mut(position)?.occupant = Some(knight);
        Ok(())
    }

    /// Clears the occupant and returns who was there.
    pub fn clear_knight(&mut self, position: Position) -> Result<Option<KnightId>, BoardError> {
        Ok(self.cell_at_mut(position)?.occupant.take())
    }

    pub fn add_item(&mut self, position: Position, item: ItemId) -> Result<(), BoardError> {
        self.cell_at_mut(position)?
            .items
            .try_push(item)
            .map_err(|_| BoardError::CellFull {
                position,
                max: GameConfig::MAX_ITEMS,
            })
    }

    /// Removes an item from the cell's list. Returns false if it was not there.
    pub fn remove_item(&mut self, position: Position, item: ItemId) -> Result<bool, BoardError> {
        let cell = self.cell_at_mut(position)?;
        match cell.items.iter().position(|lying| *lying == item) {
            Some(index) => {
                // `remove` keeps the arrival order of the remaining items.
                cell.items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flat_map(|row| row.iter())
    }

    /// Iterates over the cells of one row, west to east.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Cell> {
        self.cells.get(row).into_iter().flat_map(|cells| cells.iter())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_at_rejects_positions_off_the_board() {
        let board = Board::new();

        for position in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(8, 0),
            Position::new(0, 8),
        ] {
            assert_eq!(
                board.cell_at(position),
                Err(BoardError::OutOfBounds { position })
            );
        }
        assert_eq!(
            board.cell_at(Position::new(7, 7)).unwrap().position(),
            Position::new(7, 7)
        );
    }

    #[test]
    fn place_and_clear_knight() {
        let mut board = Board::new();
        let pos = Position::new(3, 3);

        board.place_knight(pos, KnightId('R')).unwrap();
        assert_eq!(board.occupant(pos).unwrap(), Some(KnightId('R')));

        assert_eq!(board.clear_knight(pos).unwrap(), Some(KnightId('R')));
        assert_eq!(board.occupant(pos).unwrap(), None);
    }

    #[test]
    fn shared_cell_keeps_every_item_in_order() {
        let mut board = Board::new();
        let pos = Position::new(2, 2);

        board.add_item(pos, ItemId::AXE).unwrap();
        board.add_item(pos, ItemId::DAGGER).unwrap();
        board.add_item(pos, ItemId::HELMET).unwrap();

        assert!(board.remove_item(pos, ItemId::DAGGER).unwrap());
        assert_eq!(
            board.cell_at(pos).unwrap().items(),
            &[ItemId::AXE, ItemId::HELMET]
        );
    }

    #[test]
    fn removing_absent_item_is_a_no_op() {
        let mut board = Board::new();
        let pos = Position::new(1, 6);
        board.add_item(pos, ItemId::AXE).unwrap();

        assert!(!board.remove_item(pos, ItemId::HELMET).unwrap());
        assert_eq!(board.cell_at(pos).unwrap().items(), &[ItemId::AXE]);
    }

    #[test]
    fn cells_iterate_row_major() {
        let board = Board::new();
        let positions: Vec<_> = board.cells().take(9).map(Cell::position).collect();

        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[7], Position::new(0, 7));
        assert_eq!(positions[8], Position::new(1, 0));
        assert_eq!(board.cells().count(), 64);
    }
}
