//! Plays a move list against a starting layout.
use anyhow::{Context, Result};
use arena_core::{
    GameConfig, GameEngine, GameEnv, GameError, GameState, MoveCommand, MoveOutcome, Scenario,
};

/// Result of playing a move list.
#[derive(Clone, Debug)]
pub struct SessionReport {
    pub state: GameState,
    pub outcomes: Vec<MoveOutcome>,
    /// Commands that were rejected, with their 1-based position in the list.
    pub rejected: Vec<(usize, MoveCommand)>,
}

impl SessionReport {
    pub fn applied(&self) -> usize {
        self.outcomes.len()
    }
}

/// Builds the starting state and plays every command in order.
///
/// In strict mode the first rejected command aborts the session. Otherwise it
/// is logged and skipped; the engine guarantees that a rejected command left
/// the state untouched.
pub fn run_session(
    scenario: &Scenario,
    config: &GameConfig,
    commands: &[MoveCommand],
    strict: bool,
) -> Result<SessionReport> {
    let mut state = GameState::from_scenario(scenario).context("Invalid starting layout")?;
    let mut outcomes = Vec::with_capacity(commands.len());
    let mut rejected = Vec::new();

    {
        let mut engine = GameEngine::new(&mut state, GameEnv::new(config));

        for (index, command) in commands.iter().enumerate() {
            let number = index + 1;
            match engine.execute(command) {
                Ok(outcome) => {
                    log_outcome(engine.state().turn, &outcome);
                    outcomes.push(outcome);
                }
                Err(error) if strict => {
                    return Err(error)
                        .with_context(|| format!("Move {} ({}) rejected", number, command));
                }
                Err(error) => {
                    tracing::warn!(
                        move_number = number,
                        command = %command,
                        code = error.error_code(),
                        severity = error.severity().as_str(),
                        "skipping rejected move: {}",
                        error
                    );
                    rejected.push((number, *command));
                }
            }
        }
    }

    tracing::info!(
        applied = outcomes.len(),
        rejected = rejected.len(),
        live = state.knights.live().count(),
        "session finished"
    );

    Ok(SessionReport {
        state,
        outcomes,
        rejected,
    })
}

fn log_outcome(turn: u64, outcome: &MoveOutcome) {
    let to = outcome
        .to
        .map_or_else(|| "off the board".to_string(), |position| position.to_string());
    tracing::debug!(
        turn,
        knight = %outcome.knight,
        direction = %outcome.direction,
        "{} -> {}",
        outcome.from,
        to
    );

    if let Some(item) = outcome.picked_up {
        tracing::info!(turn, knight = %outcome.knight, item = %item, "picked up item");
    }
    if let Some(report) = outcome.combat {
        tracing::info!(
            turn,
            attacker = %report.attacker,
            defender = %report.defender,
            winner = %report.winner,
            "knight {} killed",
            report.loser
        );
    }
    if outcome.drowned() {
        tracing::info!(
            turn,
            knight = %outcome.knight,
            dropped = ?outcome.dropped,
            "knight drowned"
        );
    }
}
