//! Read-only inputs to the engine.
//!
//! A [`Scenario`] describes the starting layout and is consumed once when the
//! state is built. [`GameEnv`] bundles the rule configuration the action
//! pipeline consults on every move.
mod scenario;

pub use scenario::{ItemSpec, KnightSpec, Scenario};

use crate::action::PickupPolicy;
use crate::config::GameConfig;

/// Borrowed view of the rule configuration handed to every transition.
#[derive(Clone, Copy, Debug)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    pub fn pickup_policy(&self) -> &'a PickupPolicy {
        &self.config.pickup_priority
    }
}

impl<'a> From<&'a GameConfig> for GameEnv<'a> {
    fn from(config: &'a GameConfig) -> Self {
        Self::new(config)
    }
}
