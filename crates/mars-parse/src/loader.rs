//! Reading instruction text from files and streams.
//!
//! Lines are split on `\n` with any trailing `\r` removed, so CRLF files load
//! the same as LF files.  Blank lines are kept; the parser decides what they
//! mean.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use mars_core::ExploreConfig;
use tracing::debug;

use crate::parser::{World, parse_lines};
use crate::{ParseError, ParseResult};

/// Read every line of the file at `path`.
pub fn load_lines_file(path: &Path) -> ParseResult<Vec<String>> {
    let file = File::open(path).map_err(ParseError::Io)?;
    let lines = load_lines_reader(file)?;
    debug!(path = %path.display(), lines = lines.len(), "loaded instruction file");
    Ok(lines)
}

/// Like [`load_lines_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` or `&[u8]`) or for stdin.
pub fn load_lines_reader<R: Read>(reader: R) -> ParseResult<Vec<String>> {
    BufReader::new(reader)
        .lines()
        .map(|line| line.map_err(ParseError::Io))
        .collect()
}

/// Load and parse the file at `path` in one step.
pub fn parse_file(path: &Path, config: &ExploreConfig) -> ParseResult<World> {
    let lines = load_lines_file(path)?;
    parse_lines(&lines, config)
}

/// Load and parse any `Read` source in one step.
pub fn parse_reader<R: Read>(reader: R, config: &ExploreConfig) -> ParseResult<World> {
    let lines = load_lines_reader(reader)?;
    parse_lines(&lines, config)
}
