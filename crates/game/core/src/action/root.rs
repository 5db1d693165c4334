//! Move list digest.

use super::MoveCommand;

/// Computes a SHA-256 commitment to a move list.
///
/// Order matters: the same commands in a different order hash differently.
/// Paired with [`crate::GameState::compute_state_root`] it identifies a replay.
///
/// Requires the `serde` feature.
pub fn compute_moves_root(commands: &[MoveCommand]) -> [u8; 32] {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();

    for command in commands {
        // bincode serialization is deterministic and consistent
        if let Ok(bytes) = bincode::serialize(command) {
            hasher.update(&bytes);
        }
    }

    hasher.finalize().into()
}
