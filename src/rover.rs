//! Rover state and its motion operations.

use crate::error::{BlockCause, ObstacleDetected};
use crate::grid::Grid;
use crate::orientation::Orientation;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Outcome of the most recent move attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The last move (if any) was committed.
    #[default]
    Clear,
    /// The last move was refused; holds the blocked target cell.
    ObstacleAt(IVec2),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clear => f.write_str("No obstacles detected"),
            Self::ObstacleAt(p) => write!(f, "Obstacle detected at ({}, {})", p.x, p.y),
        }
    }
}

/// A rover on a [`Grid`].
///
/// Tracks position, facing and the status of the last move. Turns always succeed;
/// a move is validated against the grid and leaves the rover untouched when refused.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rover {
    position: IVec2,
    orientation: Orientation,
    grid: Grid,
    status: Status,
}

impl Rover {
    /// Places a rover on `grid`. The start cell is not validated.
    pub fn new(position: IVec2, orientation: Orientation, grid: Grid) -> Self {
        Self {
            position,
            orientation,
            grid,
            status: Status::Clear,
        }
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn turn_left(&mut self) {
        self.orientation = self.orientation.left();
        tracing::debug!(orientation = %self.orientation, "turned left");
    }

    pub fn turn_right(&mut self) {
        self.orientation = self.orientation.right();
        tracing::debug!(orientation = %self.orientation, "turned right");
    }

    /// Cell one step ahead of the rover, or `None` if the step leaves `i32` range.
    pub fn next_position(&self) -> Option<IVec2> {
        let delta = self.orientation.delta();
        Some(IVec2::new(
            self.position.x.checked_add(delta.x)?,
            self.position.y.checked_add(delta.y)?,
        ))
    }

    /// Steps one cell forward.
    ///
    /// On success the new position is committed and the status reset to
    /// [`Status::Clear`]. If the target is out of bounds or an obstacle, the
    /// position is kept, the status becomes [`Status::ObstacleAt`] and
    /// [`ObstacleDetected`] is returned.
    pub fn move_forward(&mut self) -> Result<(), ObstacleDetected> {
        let (target, cause) = match self.next_position() {
            Some(target) if self.grid.is_valid(target) => {
                self.position = target;
                self.status = Status::Clear;
                tracing::debug!(x = target.x, y = target.y, "moved");
                return Ok(());
            }
            Some(target) if self.grid.in_bounds(target) => (target, BlockCause::Obstacle),
            Some(target) => (target, BlockCause::OutOfBounds),
            // Stepping past i32 range; report the saturated edge cell.
            None => (
                self.position.saturating_add(self.orientation.delta()),
                BlockCause::OutOfBounds,
            ),
        };

        self.status = Status::ObstacleAt(target);
        Err(ObstacleDetected {
            from: self.position,
            target,
            cause,
        })
    }

    /// `Rover is at (x, y) facing NORTH. <status>.`
    pub fn status_report(&self) -> String {
        format!(
            "Rover is at ({}, {}) facing {}. {}.",
            self.position.x, self.position.y, self.orientation, self.status
        )
    }

    /// `Final Position: (x, y, NORTH)`
    pub fn final_position(&self) -> String {
        format!(
            "Final Position: ({}, {}, {})",
            self.position.x, self.position.y, self.orientation
        )
    }
}
