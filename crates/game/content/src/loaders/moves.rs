//! Move list loader.
//!
//! A move list holds one command per line:
//!
//! ```text
//! GAME-START
//! R:S
//! B:E
//! GAME-END
//! ```
//!
//! The framing lines are optional. Blank lines and lines starting with `#`
//! are ignored.

use std::path::Path;

use arena_core::MoveCommand;

use crate::loaders::{LoadResult, read_file};

const START_MARKER: &str = "GAME-START";
const END_MARKER: &str = "GAME-END";

/// Loader for move lists.
pub struct MovesLoader;

impl MovesLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<MoveCommand>> {
        let content = read_file(path)?;
        let commands = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse moves file {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), moves = commands.len(), "loaded move list");
        Ok(commands)
    }

    /// Parses a move list. Errors name the 1-based line that failed.
    pub fn parse(content: &str) -> LoadResult<Vec<MoveCommand>> {
        let mut commands = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if Self::is_ignored(line) {
                continue;
            }

            let command = line
                .parse::<MoveCommand>()
                .map_err(|e| anyhow::anyhow!("line {}: {}", index + 1, e))?;
            commands.push(command);
        }

        Ok(commands)
    }

    fn is_ignored(line: &str) -> bool {
        line.is_empty()
            || line.starts_with('#')
            || line.eq_ignore_ascii_case(START_MARKER)
            || line.eq_ignore_ascii_case(END_MARKER)
    }
}
