//! The bounded world model: grid size plus obstacle cells.

use glam::{IVec2, UVec2};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The bounded world a rover moves in.
///
/// Cells run from `(0, 0)` to `(width - 1, height - 1)`. Obstacles are matched by
/// exact coordinate; an obstacle outside the bounds is kept but has no extra effect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: UVec2,
    obstacles: HashSet<IVec2>,
}

impl Grid {
    /// Creates a `width` x `height` grid with the given obstacle cells.
    pub fn new(width: u32, height: u32, obstacles: impl IntoIterator<Item = IVec2>) -> Self {
        Self {
            size: UVec2::new(width, height),
            obstacles: obstacles.into_iter().collect(),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.size.x
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.size.y
    }

    /// All obstacle cells, including any outside the bounds.
    pub fn obstacles(&self) -> &HashSet<IVec2> {
        &self.obstacles
    }

    /// True iff `0 <= x < width` and `0 <= y < height`.
    pub fn in_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.size.x && (pos.y as u32) < self.size.y
    }

    /// True iff `pos` is exactly one of the obstacle cells.
    pub fn has_obstacle(&self, pos: IVec2) -> bool {
        self.obstacles.contains(&pos)
    }

    /// In bounds and not blocked.
    pub fn is_valid(&self, pos: IVec2) -> bool {
        self.in_bounds(pos) && !self.has_obstacle(pos)
    }
}
