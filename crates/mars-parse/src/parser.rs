//! Line-oriented instruction parser.
//!
//! The first non-blank line is the surface.  Every following non-blank line
//! is classified by token count alone:
//!
//! | Tokens | Meaning                                          |
//! |--------|--------------------------------------------------|
//! | 3      | robot position `x y heading`                     |
//! | 1      | instruction string for the preceding position    |
//! | other  | `MalformedInputLine`                             |
//!
//! Headings and command letters are not validated here.  Unknown letters are
//! carried as `Heading::Unknown` / `Command::Unknown` and only fail when a
//! robot acts on them.

use mars_core::{Command, ExploreConfig, GridPos, Heading, RobotId, Surface};
use mars_robot::Robot;
use tracing::debug;

use crate::{ParseError, ParseResult};

/// A parsed input: the surface plus every robot in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    pub surface: Surface,
    pub robots:  Vec<Robot>,
}

/// A position line still waiting for its instruction line.
struct PendingRobot {
    line:    usize,
    pos:     GridPos,
    heading: Heading,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse a whole input into a [`World`].
///
/// Fails with [`ParseError::EmptyInstructions`] if there are no non-blank
/// lines, or if the surface line is not followed by at least one robot.
pub fn parse_lines<S: AsRef<str>>(lines: &[S], config: &ExploreConfig) -> ParseResult<World> {
    let mut numbered = lines
        .iter()
        .enumerate()
        .map(|(i, l)| (i + 1, l.as_ref()))
        .filter(|(_, l)| !l.trim().is_empty());

    let Some((surface_line, first)) = numbered.next() else {
        return Err(ParseError::EmptyInstructions("input has no lines"));
    };
    let surface = parse_surface_at(first, surface_line, config)?;

    let mut robots: Vec<Robot> = Vec::new();
    let mut pending: Option<PendingRobot> = None;

    for (line, text) in numbered {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [x, y, heading] => {
                if let Some(open) = pending.take() {
                    return Err(ParseError::MissingInstructionLine { line: open.line });
                }
                pending = Some(parse_position(line, x, y, heading)?);
            }
            [instructions] => {
                let Some(open) = pending.take() else {
                    return Err(ParseError::MissingInstructionLine { line });
                };
                let count = instructions.chars().count();
                if count > config.max_instructions {
                    return Err(ParseError::TooManyInstructions {
                        line,
                        count,
                        max: config.max_instructions,
                    });
                }
                let id = RobotId(robots.len() as u32);
                debug!(%id, pos = %open.pos, heading = %open.heading, count, "parsed robot");
                robots.push(Robot::new(
                    id,
                    open.pos,
                    open.heading,
                    Command::parse_sequence(instructions),
                ));
            }
            other => {
                return Err(ParseError::MalformedInputLine { line, tokens: other.len() });
            }
        }
    }

    if let Some(open) = pending {
        return Err(ParseError::MissingInstructionLine { line: open.line });
    }
    if robots.is_empty() {
        return Err(ParseError::EmptyInstructions("no robots declared after the surface line"));
    }

    debug!(%surface, robots = robots.len(), "parsed world");
    Ok(World { surface, robots })
}

/// Parse a single surface line `"<max_x> <max_y>"`.
pub fn parse_surface(text: &str, config: &ExploreConfig) -> ParseResult<Surface> {
    parse_surface_at(text, 1, config)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_surface_at(text: &str, line: usize, config: &ExploreConfig) -> ParseResult<Surface> {
    let malformed = |reason: String| ParseError::MalformedSurface { line, reason };

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [x, y] = tokens.as_slice() else {
        return Err(malformed(format!(
            "expected two integers separated by whitespace, got {} tokens",
            tokens.len()
        )));
    };
    let max_x = parse_int(x).map_err(|e| malformed(format!("x {x:?}: {e}")))?;
    let max_y = parse_int(y).map_err(|e| malformed(format!("y {y:?}: {e}")))?;

    Surface::with_limit(max_x, max_y, config.max_coordinate).map_err(|e| malformed(e.to_string()))
}

fn parse_position(line: usize, x: &str, y: &str, heading: &str) -> ParseResult<PendingRobot> {
    let malformed = |reason: String| ParseError::MalformedRobotPosition { line, reason };

    let px = parse_int(x).map_err(|e| malformed(format!("x {x:?}: {e}")))?;
    let py = parse_int(y).map_err(|e| malformed(format!("y {y:?}: {e}")))?;

    let mut chars = heading.chars();
    let (Some(symbol), None) = (chars.next(), chars.next()) else {
        return Err(malformed(format!("heading {heading:?} must be a single letter")));
    };

    Ok(PendingRobot {
        line,
        pos:     GridPos::new(px, py),
        heading: Heading::from_symbol(symbol),
    })
}

fn parse_int(token: &str) -> Result<i32, std::num::ParseIntError> {
    token.parse::<i32>()
}
