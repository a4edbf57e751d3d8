//! `mars-robot` — a robot's position, heading, instructions, and the moves
//! that change them.
//!
//! # Crate layout
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`robot`]   | `Robot` — state plus turn/move/execute primitives   |
//! |             | `RobotStatus` — the report line                     |
//! | [`error`]   | `RobotError`, `RobotResult<T>`                      |
//!
//! # Movement model
//!
//! Each primitive is a pure state transition on one robot.  Turns change the
//! heading only; moves change exactly one axis by one cell.  `move_backward`
//! undoes `move_forward` and exists so a robot that stepped off the grid can
//! be put back on its last valid cell.

pub mod error;
pub mod robot;

#[cfg(test)]
mod tests;

pub use error::{RobotError, RobotResult};
pub use robot::{Robot, RobotStatus};
