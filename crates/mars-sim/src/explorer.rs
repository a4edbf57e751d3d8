//! The `Explorer` struct and its run loop.

use mars_core::{ExecutionMode, ExploreConfig, Surface};
use mars_robot::Robot;
use tracing::{debug, warn};

use crate::{ExplorerObserver, Scent, ScentStore, SimError, SimResult};

/// Counters accumulated across every `run` call on one explorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Robots in the explorer.
    pub robots:  usize,
    /// Robots that fell off the grid.
    pub lost:    usize,
    /// Robots skipped because they started off-grid.
    pub skipped: usize,
    /// Forward moves suppressed by a scent.
    pub blocked: usize,
    /// Failed instructions ignored in lenient mode.
    pub ignored: usize,
}

/// The exploration engine.
///
/// Owns the surface, the robots, and the scents left so far.  Each explorer
/// is an independent world: scents never leak between explorers.
///
/// Create via [`ExplorerBuilder`][crate::ExplorerBuilder].
pub struct Explorer {
    /// Run configuration (execution mode, limits).
    pub config: ExploreConfig,

    pub(crate) surface: Surface,
    pub(crate) robots:  Vec<Robot>,
    pub(crate) scents:  ScentStore,
    pub(crate) summary: RunSummary,
    /// Index of the first robot `run` has not yet finished with.
    pub(crate) next:    usize,
}

impl Explorer {
    // ── Public API ────────────────────────────────────────────────────────

    /// Drive every robot, in input order, through its remaining instructions.
    ///
    /// Each robot is visited once, so calling `run` again on a finished
    /// explorer changes nothing.
    ///
    /// In [`ExecutionMode::Strict`] the first failing instruction aborts the
    /// run; robots before it keep their final state, robots after it are not
    /// started.  A later `run` resumes the failed robot after the bad
    /// instruction.  In [`ExecutionMode::Lenient`] this never returns an error.
    pub fn run<O: ExplorerObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.next < self.robots.len() {
            self.explore_robot(self.next, observer)?;
            self.next += 1;
        }
        debug!(
            lost = self.summary.lost,
            skipped = self.summary.skipped,
            blocked = self.summary.blocked,
            scents = self.scents.len(),
            "exploration finished"
        );
        observer.on_run_end(&self.summary);
        Ok(())
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Robots in input order.
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    pub fn scents(&self) -> &ScentStore {
        &self.scents
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    // ── Per-robot processing ──────────────────────────────────────────────

    fn explore_robot<O: ExplorerObserver>(&mut self, idx: usize, observer: &mut O) -> SimResult<()> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let surface = self.surface;
        let mode    = self.config.mode;
        let scents  = &mut self.scents;
        let summary = &mut self.summary;
        let robot   = &mut self.robots[idx];

        if surface.is_off_grid(robot.pos) {
            warn!(robot = %robot.id, pos = %robot.pos, %surface, "robot starts off-grid, skipping");
            robot.finish();
            summary.skipped += 1;
            observer.on_robot_skipped(robot);
            return Ok(());
        }

        debug!(robot = %robot.id, pos = %robot.pos, heading = %robot.heading, "robot start");
        observer.on_robot_start(robot);

        while let Some((step, command)) = robot.next_command() {
            if scents.blocks(robot.pos, robot.heading, command) {
                debug!(robot = %robot.id, step, pos = %robot.pos, "scent blocks forward move");
                summary.blocked += 1;
                observer.on_instruction_blocked(robot, step);
                continue;
            }

            if let Err(source) = robot.execute(command) {
                match mode {
                    ExecutionMode::Strict => {
                        return Err(SimError::Execution { robot: robot.id, step, source });
                    }
                    ExecutionMode::Lenient => {
                        warn!(robot = %robot.id, step, error = %source, "ignoring failed instruction");
                        summary.ignored += 1;
                        observer.on_instruction_ignored(robot, step);
                        continue;
                    }
                }
            }

            if surface.is_off_grid(robot.pos) {
                // The step that left the grid succeeded, so the heading is
                // cardinal and stepping back cannot fail.
                robot
                    .mark_lost()
                    .map_err(|source| SimError::Execution { robot: robot.id, step, source })?;
                let scent = Scent::new(robot.pos, robot.heading);
                scents.leave(scent);
                summary.lost += 1;
                debug!(robot = %robot.id, pos = %scent.pos, heading = %scent.heading, "robot lost, scent left");
                observer.on_robot_lost(robot, scent);
                break;
            }
        }

        debug!(robot = %robot.id, "robot end: {robot}");
        observer.on_robot_end(robot);
        Ok(())
    }
}
