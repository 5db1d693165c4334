//! JSON export of the final board.
use std::path::Path;

use anyhow::{Context, Result};
use arena_core::GameSnapshot;

pub fn to_json(snapshot: &GameSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")
}

/// Writes the snapshot as pretty-printed JSON, replacing any existing file.
pub fn write_snapshot(path: &Path, snapshot: &GameSnapshot) -> Result<()> {
    let json = to_json(snapshot)?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;

    tracing::info!(path = %path.display(), "snapshot exported");
    Ok(())
}
