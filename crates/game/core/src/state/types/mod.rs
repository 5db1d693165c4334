pub mod board;
pub mod common;
pub mod item;
pub mod knight;

// Re-export common types
pub use common::{ItemId, KnightId, Position};

// Re-export board types
pub use board::{Board, BoardError, Cell};

// Re-export entity types and registries
pub use item::{ItemLocation, ItemState, ItemsState};
pub use knight::{KnightState, KnightStatus, KnightsState};
