//! # mars-rover
//!
//! A single rover on a bounded integer grid. Command strings (`M`, `L`, `R`) are
//! parsed into [`Command`]s, queued on a [`Controller`] and executed against one
//! [`Rover`], which validates every move against its [`Grid`] before mutating.
//!
//! Execution stops at the first [`ObstacleDetected`]; the rover keeps its last
//! valid position and the failure is returned in the [`ExecutionReport`].

pub mod command;
pub mod controller;
pub mod error;
pub mod grid;
pub mod orientation;
pub mod rover;

pub use command::*;
pub use controller::*;
pub use error::*;
pub use grid::*;
pub use orientation::*;
pub use rover::*;
