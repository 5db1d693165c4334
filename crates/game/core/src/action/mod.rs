//! Action domain: move commands and the rules they trigger.
//!
//! # Module Structure
//!
//! - `command`: textual move commands (`R:E`) and their parse errors
//! - `movement`: the [`MoveAction`] transition (step, drown, pickup, combat)
//! - `pickup`: explicit item priority used when several items share a cell
//! - `combat`: deterministic fight resolution
//! - `root`: digest over a move list

pub mod combat;
pub mod command;
pub mod movement;
pub mod pickup;
#[cfg(feature = "serde")]
mod root;

pub use combat::{CombatReport, FightResult, resolve_fight};
pub use command::{CommandParseError, MoveCommand};
pub use movement::{CardinalDirection, MoveAction, MoveError, MoveOutcome};
pub use pickup::{PickupPolicy, PickupRank};

#[cfg(feature = "serde")]
pub use root::compute_moves_root;

use crate::env::GameEnv;
use crate::state::GameState;

/// Defines how a concrete action mutates game state.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
