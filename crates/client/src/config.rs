//! Runner configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Configuration for one run of the arena binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub moves_file: PathBuf,
    /// Starting layout; the canonical layout is used when unset.
    pub scenario_file: Option<PathBuf>,
    /// Rule configuration; defaults apply when unset.
    pub config_file: Option<PathBuf>,
    pub output_file: PathBuf,
    /// Directory for per-session log files. Logs go to stderr only when unset.
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
    /// Abort on the first rejected move instead of skipping it.
    pub strict: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            moves_file: PathBuf::from(Self::DEFAULT_MOVES_FILE),
            scenario_file: None,
            config_file: None,
            output_file: PathBuf::from(Self::DEFAULT_OUTPUT_FILE),
            log_dir: None,
            session_id: None,
            strict: false,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_MOVES_FILE: &'static str = "moves.txt";
    pub const DEFAULT_OUTPUT_FILE: &'static str = "final_state.json";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_MOVES_FILE` - Move list to play (default: moves.txt)
    /// - `ARENA_SCENARIO_FILE` - RON/TOML starting layout (default: canonical layout)
    /// - `ARENA_CONFIG_FILE` - TOML rule configuration (default: built-in rules)
    /// - `ARENA_OUTPUT_FILE` - JSON snapshot destination (default: final_state.json)
    /// - `ARENA_LOG_DIR` - Directory for session log files (default: stderr only)
    /// - `ARENA_SESSION_ID` - Session identifier for the log directory (default: timestamp)
    /// - `ARENA_STRICT` - Abort on the first rejected move (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("ARENA_MOVES_FILE") {
            config.moves_file = PathBuf::from(path);
        }
        config.scenario_file = lookup("ARENA_SCENARIO_FILE").map(PathBuf::from);
        config.config_file = lookup("ARENA_CONFIG_FILE").map(PathBuf::from);
        if let Some(path) = lookup("ARENA_OUTPUT_FILE") {
            config.output_file = PathBuf::from(path);
        }
        config.log_dir = lookup("ARENA_LOG_DIR").map(PathBuf::from);
        config.session_id = lookup("ARENA_SESSION_ID");

        if let Some(strict) = read_value::<bool>(lookup("ARENA_STRICT")) {
            config.strict = strict;
        }

        config
    }

    /// Applies command-line arguments. The first positional argument names the move list.
    pub fn with_args(mut self, mut args: impl Iterator<Item = String>) -> Self {
        if let Some(path) = args.next() {
            self.moves_file = PathBuf::from(path);
        }
        self
    }
}

fn read_value<T>(raw: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    raw?.trim().parse().ok()
}
