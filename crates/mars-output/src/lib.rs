//! `mars-output` — report writers for final robot states.
//!
//! Two backends are provided:
//!
//! | Writer        | Output                                                  |
//! |---------------|---------------------------------------------------------|
//! | `TextWriter`  | `"<x> <y> <heading>[ LOST]"`, one line per robot        |
//! | `CsvWriter`   | header `robot,x,y,heading,lost`, one record per robot   |
//!
//! Both implement [`ReportWriter`] and write to any `std::io::Write`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mars_output::{ReportWriter, TextWriter};
//!
//! let mut writer = TextWriter::new(std::io::stdout().lock());
//! writer.write_robots(explorer.robots())?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use report::{report_lines, write_report};
pub use row::RobotReportRow;
pub use text::TextWriter;
pub use writer::ReportWriter;
