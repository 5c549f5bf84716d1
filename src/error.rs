//! Error and warning types raised by the rover core.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Why a move target was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockCause {
    /// The target lies outside `[0, width) x [0, height)`.
    OutOfBounds,
    /// The target is a member of the grid's obstacle set.
    Obstacle,
}

impl std::fmt::Display for BlockCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("out of bounds"),
            Self::Obstacle => f.write_str("obstacle"),
        }
    }
}

/// A move was refused. The rover did not change position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("Obstacle detected. Rover cannot move from ({}, {}) to ({}, {}): {cause}", .from.x, .from.y, .target.x, .target.y)]
pub struct ObstacleDetected {
    /// Position the rover was standing on.
    pub from: IVec2,
    /// Cell the move would have landed on.
    pub target: IVec2,
    pub cause: BlockCause,
}

/// A character in a command string that maps to no command.
///
/// Collected by the parser as a warning; never returned as an `Err`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("The command {token} is not in my command prompt (position {index})")]
pub struct UnrecognizedToken {
    /// Character offset within the parsed string.
    pub index: usize,
    pub token: char,
}

/// Invalid input to [`RoverConfig::build`](crate::RoverConfig::build).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid orientation code '{0}', expected one of N, E, S, W")]
    InvalidOrientation(char),
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },
}
