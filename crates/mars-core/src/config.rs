//! Run configuration shared by the parser and the explorer.

use std::fmt;
use std::str::FromStr;

use crate::{MAX_COORDINATE, MarsError};

/// How the explorer reacts when a robot cannot carry out an instruction
/// (an unknown command letter, or an unknown heading it tries to turn or
/// move along).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// Abort the run and return the error.
    Strict,
    /// Log the error, treat the instruction as a no-op, and keep going.
    #[default]
    Lenient,
}

impl ExecutionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionMode::Strict  => "strict",
            ExecutionMode::Lenient => "lenient",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionMode {
    type Err = MarsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict"  => Ok(ExecutionMode::Strict),
            "lenient" => Ok(ExecutionMode::Lenient),
            other => Err(MarsError::Config(format!(
                "unknown execution mode {other:?}: expected \"strict\" or \"lenient\""
            ))),
        }
    }
}

/// Top-level exploration configuration.
///
/// Typically assembled from CLI flags by the application crate and passed to
/// both the parser and the explorer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExploreConfig {
    /// Strict or lenient handling of execution errors.  Default: lenient.
    pub mode: ExecutionMode,

    /// Longest instruction line the parser accepts.  Default: 100.
    pub max_instructions: usize,

    /// Largest surface bound the parser accepts.  Default: 50.
    pub max_coordinate: i32,
}

impl ExploreConfig {
    pub const DEFAULT_MAX_INSTRUCTIONS: usize = 100;

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.mode == ExecutionMode::Strict
    }
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            mode:             ExecutionMode::default(),
            max_instructions: Self::DEFAULT_MAX_INSTRUCTIONS,
            max_coordinate:   MAX_COORDINATE,
        }
    }
}
