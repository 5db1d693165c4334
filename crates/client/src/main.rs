//! Knights arena binary.
//!
//! ```bash
//! # Play moves.txt against the canonical layout
//! cargo run -p arena-client
//!
//! # Play a specific list, aborting on the first rejected move
//! ARENA_STRICT=true cargo run -p arena-client -- games/opening.txt
//! ```

use anyhow::Result;
use arena_client::{ClientConfig, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env().with_args(std::env::args().skip(1));

    let _guard = logging::setup_logging(&config)?;

    arena_client::run(&config)?;
    Ok(())
}
