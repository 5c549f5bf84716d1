//! Command queue and execution against a single [`Rover`].
//!
//! Build a rover from a [`RoverConfig`], hand it to a [`Controller`], queue
//! command strings with [`Controller::add_commands`], then run them with
//! [`Controller::execute`].

use crate::command::{Command, parse};
use crate::error::{ConfigError, ObstacleDetected, UnrecognizedToken};
use crate::grid::Grid;
use crate::orientation::Orientation;
use crate::rover::Rover;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Construction parameters for a rover and its grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoverConfig {
    pub grid_width: u32,
    pub grid_height: u32,
    /// Blocked cells. Entries outside the grid are allowed and never reached.
    pub obstacles: Vec<IVec2>,
    pub start: IVec2,
    pub orientation: Orientation,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            grid_width: 10,
            grid_height: 10,
            obstacles: vec![IVec2::new(2, 2), IVec2::new(3, 5)],
            start: IVec2::ZERO,
            orientation: Orientation::North,
        }
    }
}

impl RoverConfig {
    /// Builds the grid and places a rover on it.
    pub fn build(&self) -> Result<Rover, ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        let grid = Grid::new(
            self.grid_width,
            self.grid_height,
            self.obstacles.iter().copied(),
        );
        Ok(Rover::new(self.start, self.orientation, grid))
    }
}

/// Summary of one [`Controller::execute`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    /// Commands applied successfully.
    pub executed: usize,
    /// Commands dropped after the halting command.
    pub discarded: usize,
    /// The failure that stopped the run, if any.
    pub halted_by: Option<ObstacleDetected>,
}

impl ExecutionReport {
    pub fn completed(&self) -> bool {
        self.halted_by.is_none()
    }
}

/// Queues commands and runs them against one rover.
///
/// The queue is drained by every [`execute`](Self::execute): executed commands are
/// consumed, and on a halt everything after the failing command is discarded.
/// Calling `execute` again without queuing more commands does nothing.
pub struct Controller {
    rover: Rover,
    queue: Vec<Command>,
}

impl Controller {
    pub fn new(rover: Rover) -> Self {
        Self {
            rover,
            queue: Vec::new(),
        }
    }

    /// Parses `tokens` and appends the commands to the queue.
    ///
    /// Returns the warnings for unrecognized characters in this call.
    pub fn add_commands(&mut self, tokens: &str) -> Vec<UnrecognizedToken> {
        let parsed = parse(tokens);
        self.queue.extend(parsed.commands);
        parsed.warnings
    }

    /// Commands waiting for the next [`execute`](Self::execute).
    pub fn pending(&self) -> &[Command] {
        &self.queue
    }

    pub fn rover(&self) -> &Rover {
        &self.rover
    }

    pub fn into_rover(self) -> Rover {
        self.rover
    }

    /// Runs the queued commands in order, stopping at the first obstacle.
    pub fn execute(&mut self) -> ExecutionReport {
        let queue = std::mem::take(&mut self.queue);
        let total = queue.len();
        let mut report = ExecutionReport::default();

        for cmd in queue {
            if let Err(err) = cmd.apply(&mut self.rover) {
                report.discarded = total - report.executed - 1;
                tracing::warn!(
                    target_x = err.target.x,
                    target_y = err.target.y,
                    cause = %err.cause,
                    discarded = report.discarded,
                    "{err}"
                );
                report.halted_by = Some(err);
                return report;
            }
            report.executed += 1;
        }

        tracing::info!(
            executed = report.executed,
            x = self.rover.position().x,
            y = self.rover.position().y,
            orientation = %self.rover.orientation(),
            "run completed"
        );
        report
    }
}
