//! Explorer observer trait for progress reporting and tracing.

use mars_robot::Robot;

use crate::{RunSummary, Scent};

/// Callbacks invoked by [`Explorer::run`][crate::Explorer::run] at key
/// points in the run loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — loss printer
///
/// ```rust,ignore
/// struct LossPrinter;
///
/// impl ExplorerObserver for LossPrinter {
///     fn on_robot_lost(&mut self, robot: &Robot, scent: Scent) {
///         println!("{} lost at {} facing {}", robot.id, scent.pos, scent.heading);
///     }
/// }
/// ```
pub trait ExplorerObserver {
    /// Called before a robot executes its first pending instruction.
    fn on_robot_start(&mut self, _robot: &Robot) {}

    /// Called when a robot starts off-grid and is skipped entirely.
    fn on_robot_skipped(&mut self, _robot: &Robot) {}

    /// Called when a scent stops a forward move.  `step` is the 0-based
    /// instruction index.
    fn on_instruction_blocked(&mut self, _robot: &Robot, _step: usize) {}

    /// Called when an instruction fails and lenient mode ignores it.
    fn on_instruction_ignored(&mut self, _robot: &Robot, _step: usize) {}

    /// Called once a robot has been pulled back and its scent recorded.
    fn on_robot_lost(&mut self, _robot: &Robot, _scent: Scent) {}

    /// Called after a robot stops, lost or not.
    fn on_robot_end(&mut self, _robot: &Robot) {}

    /// Called once after the last robot.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// An [`ExplorerObserver`] that does nothing.  Use when you need to call
/// `run` but don't want callbacks.
pub struct NoopObserver;

impl ExplorerObserver for NoopObserver {}
