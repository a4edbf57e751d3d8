//! Tests for mars-output.

use mars_core::{Command, GridPos, Heading, RobotId};
use mars_robot::Robot;

fn robot(id: u32, x: i32, y: i32, heading: Heading, lost: bool) -> Robot {
    let mut r = Robot::new(RobotId(id), GridPos::new(x, y), heading, vec![Command::Forward]);
    r.lost = lost;
    r
}

#[cfg(test)]
mod text_tests {
    use super::*;
    use crate::{RobotReportRow, ReportWriter, TextWriter, report_lines, write_report};

    #[test]
    fn active_row_format() {
        let row = RobotReportRow::from(&robot(0, 3, 1, Heading::South, false));
        assert_eq!(row.to_string(), "3 1 S");
    }

    #[test]
    fn lost_row_format() {
        let row = RobotReportRow::from(&robot(0, 4, 1, Heading::North, true));
        assert_eq!(row.to_string(), "4 1 N LOST");
    }

    #[test]
    fn row_matches_robot_display() {
        for r in [robot(0, 0, 0, Heading::West, false), robot(1, 5, 3, Heading::East, true)] {
            assert_eq!(RobotReportRow::from(&r).to_string(), r.to_string());
        }
    }

    #[test]
    fn unknown_heading_renders_verbatim() {
        let row = RobotReportRow::from(&robot(0, 1, 1, Heading::Unknown('Q'), false));
        assert_eq!(row.to_string(), "1 1 Q");
    }

    #[test]
    fn report_lines_keep_order() {
        let robots = [
            robot(0, 1, 1, Heading::East, false),
            robot(1, 3, 3, Heading::North, true),
            robot(2, 2, 3, Heading::South, false),
        ];
        assert_eq!(report_lines(&robots), ["1 1 E", "3 3 N LOST", "2 3 S"]);
    }

    #[test]
    fn write_report_one_line_per_robot() {
        let robots = [robot(0, 3, 1, Heading::South, false), robot(1, 4, 1, Heading::North, true)];
        let mut buf = Vec::new();
        write_report(&robots, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "3 1 S\n4 1 N LOST\n");
    }

    #[test]
    fn empty_report_writes_nothing() {
        let mut buf = Vec::new();
        write_report(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn finish_is_idempotent() {
        let mut w = TextWriter::new(Vec::new());
        w.write_robots(&[robot(0, 0, 0, Heading::North, false)]).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        assert_eq!(w.into_inner(), b"0 0 N\n");
    }
}

#[cfg(test)]
mod csv_tests {
    use std::fs::File;

    use super::*;
    use crate::csv::{CsvWriter, HEADER};
    use crate::writer::ReportWriter;

    #[test]
    fn header_and_records() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("report.csv");

        let mut w = CsvWriter::new(File::create(&path).unwrap()).unwrap();
        w.write_robots(&[
            robot(0, 1, 1, Heading::East, false),
            robot(1, 3, 3, Heading::North, true),
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, HEADER);

        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][3], "E");
        assert_eq!(&rows[0][4], "0");
        assert_eq!(&rows[1][1], "3");
        assert_eq!(&rows[1][2], "3");
        assert_eq!(&rows[1][4], "1");
    }

    #[test]
    fn header_written_even_without_robots() {
        let mut buf = Vec::new();
        {
            let mut w = CsvWriter::new(&mut buf).unwrap();
            w.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "robot,x,y,heading,lost\n");
    }
}

#[cfg(test)]
mod pipeline {
    use mars_core::ExploreConfig;
    use mars_sim::{ExplorerBuilder, NoopObserver};

    use crate::write_report;

    #[test]
    fn parse_explore_report() {
        let input = "5 3\n1 1 E\nRFRFRFRF\n\n3 2 N\nFRRFLLFFRRFLL\n\n0 3 W\nLLFFFLFLFL\n";
        let config = ExploreConfig::default();
        let world = mars_parse::parse_reader(input.as_bytes(), &config).unwrap();
        let mut explorer = ExplorerBuilder::from_world(world).config(config).build().unwrap();
        explorer.run(&mut NoopObserver).unwrap();

        let mut buf = Vec::new();
        write_report(explorer.robots(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 1 E\n3 3 N LOST\n2 3 S\n");
    }
}
