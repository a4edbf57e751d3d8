//! One-shot helpers around [`TextWriter`].

use std::io::Write;

use mars_robot::Robot;

use crate::text::TextWriter;
use crate::writer::ReportWriter;
use crate::{OutputResult, RobotReportRow};

/// Report lines for `robots`, in order, without trailing newlines.
pub fn report_lines(robots: &[Robot]) -> Vec<String> {
    robots
        .iter()
        .map(|r| RobotReportRow::from(r).to_string())
        .collect()
}

/// Write the text report for `robots` to `out` and flush it.
pub fn write_report<W: Write>(robots: &[Robot], out: W) -> OutputResult<()> {
    let mut writer = TextWriter::new(out);
    writer.write_robots(robots)?;
    writer.finish()
}
