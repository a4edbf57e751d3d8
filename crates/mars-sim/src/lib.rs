//! `mars-sim` — the exploration engine.
//!
//! # Run loop
//!
//! ```text
//! for robot in robots (input order):
//!   ① Skip      — a robot whose start is already off-grid executes nothing.
//!   ② For each instruction:
//!        F onto a scented (pos, heading)  → instruction is ignored
//!        otherwise                        → robot.execute(command)
//!   ③ Off-grid after the step           → mark lost, step back,
//!                                          leave a scent, stop this robot.
//! ```
//!
//! Robots run strictly one after another.  The scent left by robot *i* is
//! visible to every robot after it, so results depend on input order.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | Uses FxHash instead of SipHash for the scent index.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mars_core::ExploreConfig;
//! use mars_sim::{ExplorerBuilder, NoopObserver};
//!
//! let world = mars_parse::parse_file(path, &config)?;
//! let mut explorer = ExplorerBuilder::from_world(world).config(config).build()?;
//! explorer.run(&mut NoopObserver)?;
//! for robot in explorer.robots() {
//!     println!("{robot}");
//! }
//! ```

pub mod builder;
pub mod error;
pub mod explorer;
pub mod observer;
pub mod scent;


pub use builder::ExplorerBuilder;
pub use error::{SimError, SimResult};
pub use explorer::{Explorer, RunSummary};
pub use observer::{ExplorerObserver, NoopObserver};
pub use scent::{Scent, ScentStore};
