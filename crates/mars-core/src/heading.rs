//! Compass headings and robot commands.
//!
//! Both enums carry an `Unknown` variant holding the raw input character.
//! Input is read leniently: an unrecognised letter survives parsing and only
//! fails when a robot tries to act on it.

use std::fmt;

/// The direction a robot faces.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    North,
    East,
    South,
    West,
    /// A heading letter outside `N`/`E`/`S`/`W`, kept verbatim.
    Unknown(char),
}

impl Heading {
    /// The four cardinal headings in clockwise order starting at north.
    pub const CARDINALS: [Heading; 4] =
        [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Map an input letter to a heading.  Never fails.
    pub fn from_symbol(c: char) -> Self {
        match c {
            'N' => Heading::North,
            'E' => Heading::East,
            'S' => Heading::South,
            'W' => Heading::West,
            other => Heading::Unknown(other),
        }
    }

    /// The single-letter form used in input and reports.
    pub fn symbol(self) -> char {
        match self {
            Heading::North      => 'N',
            Heading::East       => 'E',
            Heading::South      => 'S',
            Heading::West       => 'W',
            Heading::Unknown(c) => c,
        }
    }

    #[inline]
    pub fn is_cardinal(self) -> bool {
        !matches!(self, Heading::Unknown(_))
    }

    /// Heading after a 90° clockwise turn.  `None` for `Unknown`.
    pub fn right(self) -> Option<Self> {
        match self {
            Heading::North      => Some(Heading::East),
            Heading::East       => Some(Heading::South),
            Heading::South      => Some(Heading::West),
            Heading::West       => Some(Heading::North),
            Heading::Unknown(_) => None,
        }
    }

    /// Heading after a 90° counter-clockwise turn.  `None` for `Unknown`.
    pub fn left(self) -> Option<Self> {
        match self {
            Heading::North      => Some(Heading::West),
            Heading::West       => Some(Heading::South),
            Heading::South      => Some(Heading::East),
            Heading::East       => Some(Heading::North),
            Heading::Unknown(_) => None,
        }
    }

    /// Unit step `(dx, dy)` for one move forward.  `None` for `Unknown`.
    pub fn delta(self) -> Option<(i32, i32)> {
        match self {
            Heading::North      => Some((0, 1)),
            Heading::East       => Some((1, 0)),
            Heading::South      => Some((0, -1)),
            Heading::West       => Some((-1, 0)),
            Heading::Unknown(_) => None,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single robot instruction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// `L` — turn 90° left, stay in place.
    Left,
    /// `R` — turn 90° right, stay in place.
    Right,
    /// `F` — move one cell along the current heading.
    Forward,
    /// Any other character, kept verbatim.
    Unknown(char),
}

impl Command {
    pub fn from_symbol(c: char) -> Self {
        match c {
            'L' => Command::Left,
            'R' => Command::Right,
            'F' => Command::Forward,
            other => Command::Unknown(other),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Command::Left       => 'L',
            Command::Right      => 'R',
            Command::Forward    => 'F',
            Command::Unknown(c) => c,
        }
    }

    /// Parse every character of `line` as one command.
    pub fn parse_sequence(line: &str) -> Vec<Command> {
        line.chars().map(Command::from_symbol).collect()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
