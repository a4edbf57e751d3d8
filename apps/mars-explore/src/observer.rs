//! Observer that turns explorer callbacks into `tracing` events.

use mars_robot::Robot;
use mars_sim::{ExplorerObserver, RunSummary, Scent};

#[derive(Default)]
pub struct TracingObserver {
    /// Number of notable events seen (skips, blocks, ignores, losses).
    pub events: usize,
}

impl ExplorerObserver for TracingObserver {
    fn on_robot_skipped(&mut self, robot: &Robot) {
        self.events += 1;
        tracing::info!(robot = %robot.id, pos = %robot.pos, "robot starts off-grid and was not moved");
    }

    fn on_instruction_blocked(&mut self, robot: &Robot, step: usize) {
        self.events += 1;
        tracing::info!(robot = %robot.id, step, pos = %robot.pos, heading = %robot.heading, "scent held robot back");
    }

    fn on_instruction_ignored(&mut self, robot: &Robot, step: usize) {
        self.events += 1;
        tracing::info!(robot = %robot.id, step, "instruction ignored");
    }

    fn on_robot_lost(&mut self, robot: &Robot, scent: Scent) {
        self.events += 1;
        tracing::info!(robot = %robot.id, pos = %scent.pos, heading = %scent.heading, "robot lost");
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        tracing::debug!(?summary, "run ended");
    }
}
