//! Compass orientation and its cyclic rotation order.

use crate::error::ConfigError;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// One of the four compass directions a rover can face.
///
/// Turning right walks the cycle `North -> East -> South -> West -> North`;
/// turning left walks it backwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Orientation {
    /// All orientations in clockwise order, starting at North.
    pub const CLOCKWISE: [Orientation; 4] = [Self::North, Self::East, Self::South, Self::West];

    fn index(self) -> usize {
        self as usize
    }

    /// The next orientation clockwise.
    pub fn right(self) -> Self {
        Self::CLOCKWISE[(self.index() + 1) % 4]
    }

    /// The next orientation counter-clockwise.
    pub fn left(self) -> Self {
        Self::CLOCKWISE[(self.index() + 3) % 4]
    }

    /// Unit step taken by a forward move. North is `+y`, East is `+x`.
    pub fn delta(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    /// Single-letter construction code (`N`, `E`, `S`, `W`).
    pub fn code(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Upper-case name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = ConfigError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'N' => Ok(Self::North),
            'E' => Ok(Self::East),
            'S' => Ok(Self::South),
            'W' => Ok(Self::West),
            other => Err(ConfigError::InvalidOrientation(other)),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
