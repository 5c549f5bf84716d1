//! Rover commands and the command-string parser.

use crate::error::{ObstacleDetected, UnrecognizedToken};
use crate::rover::Rover;
use serde::{Deserialize, Serialize};

/// One atomic instruction for a rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Step one cell forward (`M`).
    Move,
    /// Rotate 90 degrees counter-clockwise (`L`).
    TurnLeft,
    /// Rotate 90 degrees clockwise (`R`).
    TurnRight,
}

impl Command {
    /// Maps a command character to its command, if any.
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            'M' => Some(Self::Move),
            'L' => Some(Self::TurnLeft),
            'R' => Some(Self::TurnRight),
            _ => None,
        }
    }

    pub fn token(self) -> char {
        match self {
            Self::Move => 'M',
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
        }
    }

    /// Applies the command to `rover`. Only [`Command::Move`] can fail.
    pub fn apply(self, rover: &mut Rover) -> Result<(), ObstacleDetected> {
        match self {
            Self::Move => rover.move_forward(),
            Self::TurnLeft => {
                rover.turn_left();
                Ok(())
            }
            Self::TurnRight => {
                rover.turn_right();
                Ok(())
            }
        }
    }
}

/// Result of parsing a command string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    /// Recognized commands, in input order.
    pub commands: Vec<Command>,
    /// One entry per unrecognized character, in input order.
    pub warnings: Vec<UnrecognizedToken>,
}

/// Parses a command string.
///
/// `M`, `L` and `R` map to [`Command`]s. Any other character becomes a warning and
/// parsing continues with the next one.
pub fn parse(tokens: &str) -> ParseOutput {
    let mut out = ParseOutput::default();

    for (index, token) in tokens.chars().enumerate() {
        match Command::from_token(token) {
            Some(cmd) => out.commands.push(cmd),
            None => {
                let warning = UnrecognizedToken { index, token };
                tracing::warn!(index, %token, "{warning}");
                out.warnings.push(warning);
            }
        }
    }

    out
}
