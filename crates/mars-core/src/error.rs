//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `MarsError` where a core
//! constructor can fail (today only [`Surface`][crate::Surface] validation).

use thiserror::Error;

/// The error type for `mars-core` constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarsError {
    #[error("surface bound {axis}={value} is outside 0..={limit}")]
    BoundOutOfRange {
        axis:  char,
        value: i32,
        limit: i32,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `mars-core`.
pub type MarsResult<T> = Result<T, MarsError>;
