//! Data-driven content and loaders.
//!
//! This crate provides loaders for the files that feed a game:
//! - Starting layouts (RON or TOML)
//! - Game configuration (TOML)
//! - Move lists (one `<knight>:<direction>` command per line)
//!
//! All loaders produce arena-core types directly. Nothing here touches game
//! state after setup.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, MovesLoader, ScenarioFormat, ScenarioLoader};
