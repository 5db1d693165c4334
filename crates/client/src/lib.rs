//! Command-line runner for the knights arena.
//!
//! Loads a starting layout, rule configuration and move list, plays the
//! moves through the engine, prints the board and exports the final state.

pub mod config;
pub mod export;
pub mod logging;
pub mod render;
pub mod session;

pub use config::ClientConfig;
pub use export::write_snapshot;
pub use render::render_board;
pub use session::{SessionReport, run_session};

use anyhow::Result;
use arena_content::{ConfigLoader, MovesLoader, ScenarioLoader};
use arena_core::{GameConfig, Scenario, compute_moves_root};

/// Runs one game end to end and returns the session report.
pub fn run(config: &ClientConfig) -> Result<SessionReport> {
    let scenario = match &config.scenario_file {
        Some(path) => ScenarioLoader::load(path)?,
        None => Scenario::canonical(),
    };
    let game_config = match &config.config_file {
        Some(path) => ConfigLoader::load(path)?,
        None => GameConfig::default(),
    };
    let commands = MovesLoader::load(&config.moves_file)?;

    tracing::info!(
        moves = commands.len(),
        moves_root = %hex::encode(compute_moves_root(&commands)),
        strict = config.strict,
        "starting session from {}",
        config.moves_file.display()
    );

    let report = run_session(&scenario, &game_config, &commands, config.strict)?;

    println!("{}", render_board(&report.state));

    let snapshot = report.state.snapshot();
    write_snapshot(&config.output_file, &snapshot)?;

    tracing::info!(
        turn = report.state.turn,
        state_root = %hex::encode(report.state.compute_state_root()),
        "final state"
    );

    Ok(report)
}
