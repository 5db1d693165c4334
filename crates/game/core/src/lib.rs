//! Deterministic turn-resolution engine for the knights arena.
//!
//! `arena-core` defines the canonical rules (move commands, the turn engine,
//! board and entity state) and exposes pure APIs that the content loaders and
//! the client reuse. All state mutation flows through [`engine::GameEngine`],
//! and supporting crates depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use action::{
    ActionTransition, CardinalDirection, CombatReport, CommandParseError, FightResult, MoveAction,
    MoveCommand, MoveError, MoveOutcome, PickupPolicy, PickupRank, resolve_fight,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{GameEnv, ItemSpec, KnightSpec, Scenario};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Board, BoardError, Cell, GameSnapshot, GameState, InitializationError, ItemId, ItemLocation,
    ItemRecord, ItemState, ItemsState, KnightId, KnightRecord, KnightState, KnightStatus,
    KnightsState, Position,
};
pub use stats::{CombatStats, StatBonus};

#[cfg(feature = "serde")]
pub use action::compute_moves_root;
