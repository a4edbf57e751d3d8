//! A single robot and its movement primitives.

use std::fmt;

use mars_core::{Command, GridPos, Heading, RobotId};

use crate::{RobotError, RobotResult};

/// One robot on the surface.
///
/// A robot is **active** while it has instructions left and has not been
/// lost.  Once `lost` is set, or every instruction has been consumed, it is
/// **done** and never changes again.
///
/// The starting position is not validated against the surface here; the
/// explorer decides what to do with a robot that begins off-grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Robot {
    /// Input-order identifier.
    pub id: RobotId,

    /// Current cell.  For a lost robot, the last cell it held on the grid.
    pub pos: GridPos,

    /// Current heading.
    pub heading: Heading,

    /// Commands in the order they were given.
    pub instructions: Vec<Command>,

    /// `true` once the robot has stepped off the grid.
    pub lost: bool,

    /// Index of the next instruction to consume.
    cursor: usize,
}

impl Robot {
    pub fn new(id: RobotId, pos: GridPos, heading: Heading, instructions: Vec<Command>) -> Self {
        Self {
            id,
            pos,
            heading,
            instructions,
            lost: false,
            cursor: 0,
        }
    }

    // ── Primitives ────────────────────────────────────────────────────────

    /// Turn 90° clockwise.
    pub fn turn_right(&mut self) -> RobotResult<()> {
        self.heading = self.heading.right().ok_or_else(|| self.unsupported_direction())?;
        Ok(())
    }

    /// Turn 90° counter-clockwise.
    pub fn turn_left(&mut self) -> RobotResult<()> {
        self.heading = self.heading.left().ok_or_else(|| self.unsupported_direction())?;
        Ok(())
    }

    /// Step one cell along the current heading.
    ///
    /// Fails without moving if the new cell does not fit in `i32`.
    pub fn move_forward(&mut self) -> RobotResult<()> {
        let delta = self.heading.delta().ok_or_else(|| self.unsupported_direction())?;
        self.step(delta)
    }

    /// Step one cell against the current heading, undoing `move_forward`.
    pub fn move_backward(&mut self) -> RobotResult<()> {
        let (dx, dy) = self.heading.delta().ok_or_else(|| self.unsupported_direction())?;
        self.step((-dx, -dy))
    }

    /// Dispatch one command to the matching primitive.
    pub fn execute(&mut self, command: Command) -> RobotResult<()> {
        match command {
            Command::Right      => self.turn_right(),
            Command::Left       => self.turn_left(),
            Command::Forward    => self.move_forward(),
            Command::Unknown(c) => Err(RobotError::UnsupportedCommand(c)),
        }
    }

    /// Flag the robot as lost and pull it back onto its last valid cell.
    ///
    /// Consumes any remaining instructions so the robot is done afterwards.
    pub fn mark_lost(&mut self) -> RobotResult<()> {
        self.lost = true;
        self.finish();
        self.move_backward()
    }

    /// Position, heading and lost flag, as reported.
    pub fn status(&self) -> RobotStatus {
        RobotStatus { pos: self.pos, heading: self.heading, lost: self.lost }
    }

    // ── Instruction cursor ────────────────────────────────────────────────

    /// Take the next instruction, returning its index and command.
    ///
    /// Returns `None` when the robot is done.
    pub fn next_command(&mut self) -> Option<(usize, Command)> {
        if self.lost {
            return None;
        }
        let step = self.cursor;
        let command = *self.instructions.get(step)?;
        self.cursor += 1;
        Some((step, command))
    }

    /// Drop all remaining instructions without executing them.
    pub fn finish(&mut self) {
        self.cursor = self.instructions.len();
    }

    /// `true` when the robot is lost or has no instructions left.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.lost || self.cursor >= self.instructions.len()
    }

    /// Number of instructions consumed so far (executed or skipped).
    #[inline]
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Instructions not yet consumed.
    pub fn remaining(&self) -> &[Command] {
        &self.instructions[self.cursor.min(self.instructions.len())..]
    }

    fn step(&mut self, delta: (i32, i32)) -> RobotResult<()> {
        let from = self.pos;
        self.pos = from.offset(delta).ok_or(RobotError::PositionOverflow(from))?;
        Ok(())
    }

    fn unsupported_direction(&self) -> RobotError {
        RobotError::UnsupportedDirection(self.heading.symbol())
    }
}

/// The reportable part of a robot's state.
///
/// Its `Display` is the report line: `"<x> <y> <heading>"`, plus `" LOST"`
/// for a lost robot.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RobotStatus {
    pub pos:     GridPos,
    pub heading: Heading,
    pub lost:    bool,
}

impl fmt::Display for RobotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pos, self.heading)?;
        if self.lost {
            f.write_str(" LOST")?;
        }
        Ok(())
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.status(), f)
    }
}
