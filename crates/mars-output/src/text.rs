//! Plain-text report backend.

use std::io::Write;

use crate::writer::ReportWriter;
use crate::{OutputResult, RobotReportRow};

/// Writes `"<x> <y> <heading>[ LOST]"` lines to any `Write` sink.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner sink (e.g. to inspect a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for TextWriter<W> {
    fn write_row(&mut self, row: &RobotReportRow) -> OutputResult<()> {
        writeln!(self.out, "{row}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
