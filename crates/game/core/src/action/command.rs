//! Textual move commands.
//!
//! A command names a knight by its single-letter representation and a
//! direction, separated by a colon: `R:E`.

use core::fmt;
use core::str::FromStr;

use super::{CardinalDirection, MoveAction};
use crate::error::{ErrorSeverity, GameError};
use crate::state::KnightId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandParseError {
    #[error("malformed move {input:?}: expected <knight>:<direction>")]
    Malformed { input: String },

    #[error("invalid knight token {token:?}")]
    InvalidKnight { token: String },

    #[error("invalid direction token {token:?}: expected one of N, S, E, W")]
    InvalidDirection { token: String },
}

impl GameError for CommandParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "COMMAND_MALFORMED",
            Self::InvalidKnight { .. } => "COMMAND_INVALID_KNIGHT",
            Self::InvalidDirection { .. } => "COMMAND_INVALID_DIRECTION",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveCommand {
    pub knight: KnightId,
    pub direction: CardinalDirection,
}

impl MoveCommand {
    pub fn new(knight: KnightId, direction: CardinalDirection) -> Self {
        Self { knight, direction }
    }
}

impl From<MoveCommand> for MoveAction {
    fn from(command: MoveCommand) -> Self {
        MoveAction::new(command.knight, command.direction)
    }
}

impl FromStr for MoveCommand {
    type Err = CommandParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (knight, direction) =
            input
                .trim()
                .split_once(':')
                .ok_or_else(|| CommandParseError::Malformed {
                    input: input.to_owned(),
                })?;

        let knight_token = knight.trim();
        let mut chars = knight_token.chars();
        let knight = match (chars.next(), chars.next()) {
            (Some(glyph), None) if glyph.is_ascii_alphabetic() => {
                KnightId(glyph.to_ascii_uppercase())
            }
            _ => {
                return Err(CommandParseError::InvalidKnight {
                    token: knight_token.to_owned(),
                });
            }
        };

        let direction_token = direction.trim();
        let direction = direction_token.parse::<CardinalDirection>().map_err(|_| {
            CommandParseError::InvalidDirection {
                token: direction_token.to_owned(),
            }
        })?;

        Ok(Self { knight, direction })
    }
}

impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.knight, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_case_insensitive_tokens() {
        let command: MoveCommand = "  r : s ".parse().unwrap();

        assert_eq!(
            command,
            MoveCommand::new(KnightId('R'), CardinalDirection::South)
        );
        assert_eq!(command.to_string(), "R:S");
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!(
            "RE".parse::<MoveCommand>(),
            Err(CommandParseError::Malformed {
                input: "RE".to_owned()
            })
        );
        assert_eq!(
            "Red:E".parse::<MoveCommand>(),
            Err(CommandParseError::InvalidKnight {
                token: "Red".to_owned()
            })
        );
        let err = "R:X".parse::<MoveCommand>().unwrap_err();
        assert_eq!(
            err,
            CommandParseError::InvalidDirection {
                token: "X".to_owned()
            }
        );
        assert_eq!(err.error_code(), "COMMAND_INVALID_DIRECTION");
        assert!(":N".parse::<MoveCommand>().is_err());
    }
}
