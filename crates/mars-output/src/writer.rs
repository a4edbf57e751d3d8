//! The `ReportWriter` trait implemented by all backend writers.

use mars_robot::Robot;

use crate::{OutputResult, RobotReportRow};

/// Trait implemented by the text and CSV writers.
pub trait ReportWriter {
    /// Write one robot's final state.
    fn write_row(&mut self, row: &RobotReportRow) -> OutputResult<()>;

    /// Flush the underlying sink.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write every robot, in order.
    fn write_robots(&mut self, robots: &[Robot]) -> OutputResult<()> {
        for robot in robots {
            self.write_row(&RobotReportRow::from(robot))?;
        }
        Ok(())
    }
}
