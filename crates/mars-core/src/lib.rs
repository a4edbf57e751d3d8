//! `mars-core` — foundational types for the mars exploration simulator.
//!
//! This crate is a dependency of every other `mars-*` crate.  It has no
//! `mars-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `RobotId`                                               |
//! | [`grid`]      | `GridPos`, `Surface`, `MAX_COORDINATE`                  |
//! | [`heading`]   | `Heading` (N/E/S/W), `Command` (L/R/F)                  |
//! | [`config`]    | `ExploreConfig`, `ExecutionMode`                        |
//! | [`error`]     | `MarsError`, `MarsResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod grid;
pub mod heading;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ExecutionMode, ExploreConfig};
pub use error::{MarsError, MarsResult};
pub use grid::{GridPos, MAX_COORDINATE, Surface};
pub use heading::{Command, Heading};
pub use ids::RobotId;
