//! `mars-parse` — turn instruction text into a [`World`].
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`parser`]  | `World`, `parse_lines`, `parse_surface`                   |
//! | [`loader`]  | `load_lines_file`, `load_lines_reader`, `parse_file`, `parse_reader` |
//! | [`error`]   | `ParseError`, `ParseResult<T>`                            |
//!
//! # Input format
//!
//! ```text
//! 5 3          ← surface: upper-right corner, lower-left is (0, 0)
//! 1 1 E        ← robot position and heading
//! RFRFRFRF     ← that robot's instructions
//!
//! 3 2 N        ← blank lines between robots are ignored
//! FRRFLLFFRRFLL
//! ```
//!
//! Any parse failure aborts the whole input; a partial world is never
//! returned.

pub mod error;
pub mod loader;
pub mod parser;


pub use error::{ParseError, ParseResult};
pub use loader::{load_lines_file, load_lines_reader, parse_file, parse_reader};
pub use parser::{World, parse_lines, parse_surface};
