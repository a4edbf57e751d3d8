//! Fluent builder for constructing an [`Explorer`].

use mars_core::{ExploreConfig, RobotId, Surface};
use mars_parse::World;
use mars_robot::Robot;

use crate::{Explorer, RunSummary, ScentStore, SimError, SimResult};

/// Fluent builder for [`Explorer`].
///
/// # Required inputs
///
/// - [`Surface`] — the grid bounds
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                      |
/// |-----------------|------------------------------|
/// | `.robots(v)`    | No robots                    |
/// | `.config(c)`    | `ExploreConfig::default()`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut explorer = ExplorerBuilder::new(surface)
///     .robots(robots)
///     .config(ExploreConfig::default().with_mode(ExecutionMode::Strict))
///     .build()?;
/// explorer.run(&mut NoopObserver)?;
/// ```
pub struct ExplorerBuilder {
    surface: Surface,
    robots:  Vec<Robot>,
    config:  Option<ExploreConfig>,
}

impl ExplorerBuilder {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            robots: Vec::new(),
            config: None,
        }
    }

    /// Start from a parsed [`World`].
    pub fn from_world(world: World) -> Self {
        Self::new(world.surface).robots(world.robots)
    }

    /// Supply the robots, in the order they must run.
    ///
    /// Robot `i` must carry `RobotId(i)`.
    pub fn robots(mut self, robots: Vec<Robot>) -> Self {
        self.robots = robots;
        self
    }

    pub fn config(mut self, config: ExploreConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate inputs and return a ready-to-run [`Explorer`].
    pub fn build(self) -> SimResult<Explorer> {
        let config = self.config.unwrap_or_default();

        for (index, robot) in self.robots.iter().enumerate() {
            let expected = RobotId(index as u32);
            if robot.id != expected {
                return Err(SimError::RobotIdMismatch { index, expected, got: robot.id });
            }
        }

        Ok(Explorer {
            config,
            surface: self.surface,
            summary: RunSummary { robots: self.robots.len(), ..RunSummary::default() },
            robots:  self.robots,
            scents:  ScentStore::new(),
            next:    0,
        })
    }
}
