//! CSV report backend.
//!
//! Columns: `robot,x,y,heading,lost`, with `lost` written as `0`/`1`.

use std::io::Write;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{OutputResult, RobotReportRow};

pub const HEADER: [&str; 5] = ["robot", "x", "y", "heading", "lost"];

/// Writes one CSV record per robot.
pub struct CsvWriter<W: Write> {
    records:  Writer<W>,
    finished: bool,
}

impl<W: Write> CsvWriter<W> {
    /// Wrap `out` and write the header row.
    pub fn new(out: W) -> OutputResult<Self> {
        let mut records = Writer::from_writer(out);
        records.write_record(HEADER)?;
        Ok(Self { records, finished: false })
    }
}

impl<W: Write> ReportWriter for CsvWriter<W> {
    fn write_row(&mut self, row: &RobotReportRow) -> OutputResult<()> {
        self.records.write_record(&[
            row.robot.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.heading.to_string(),
            (row.lost as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.records.flush()?;
        Ok(())
    }
}
