//! Plain data row written by report backends.

use std::fmt;

use mars_core::{GridPos, Heading};
use mars_robot::{Robot, RobotStatus};

/// The final state of one robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotReportRow {
    pub robot:   u32,
    pub x:       i32,
    pub y:       i32,
    pub heading: Heading,
    pub lost:    bool,
}

impl From<&Robot> for RobotReportRow {
    fn from(r: &Robot) -> Self {
        Self {
            robot:   r.id.0,
            x:       r.pos.x,
            y:       r.pos.y,
            heading: r.heading,
            lost:    r.lost,
        }
    }
}

impl RobotReportRow {
    pub fn status(&self) -> RobotStatus {
        RobotStatus {
            pos:     GridPos::new(self.x, self.y),
            heading: self.heading,
            lost:    self.lost,
        }
    }
}

/// Same line as the robot's own `Display`.
impl fmt::Display for RobotReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.status(), f)
    }
}
