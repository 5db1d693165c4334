//! Turn resolution.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! move runs through the `pre_validate → apply → post_validate` pipeline and
//! either completes or leaves the state exactly as it was.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{CardinalDirection, MoveAction, MoveCommand, MoveOutcome};
use crate::env::GameEnv;
use crate::state::{GameState, KnightId};

/// Game engine that resolves moves against a borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    env: GameEnv<'a>,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState, env: GameEnv<'a>) -> Self {
        Self { state, env }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Moves one knight one step.
    ///
    /// Drowning and dying are ordinary outcomes reported through
    /// [`MoveOutcome::status`]. An `Err` means the move was rejected and the
    /// state is unchanged.
    pub fn move_knight(
        &mut self,
        knight: KnightId,
        direction: CardinalDirection,
    ) -> Result<MoveOutcome, ExecuteError> {
        self.resolve(MoveAction::new(knight, direction))
    }

    pub fn execute(&mut self, command: &MoveCommand) -> Result<MoveOutcome, ExecuteError> {
        self.resolve(MoveAction::from(*command))
    }

    /// Executes commands in order and stops at the first rejected one.
    ///
    /// Moves before the failure stay applied.
    pub fn execute_all(
        &mut self,
        commands: &[MoveCommand],
    ) -> Result<Vec<MoveOutcome>, ExecuteError> {
        commands
            .iter()
            .map(|command| self.execute(command))
            .collect()
    }

    fn resolve(&mut self, action: MoveAction) -> Result<MoveOutcome, ExecuteError> {
        let before = self.state.clone();

        match transition::drive_transition(&action, self.state, &self.env) {
            Ok(outcome) => {
                self.state.turn += 1;
                Ok(outcome)
            }
            Err(error) => {
                *self.state = before;
                Err(ExecuteError::Move(error))
            }
        }
    }
}
