use mars_core::GridPos;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RobotError {
    #[error("unsupported robot direction {0:?}")]
    UnsupportedDirection(char),

    #[error("unsupported command {0:?}")]
    UnsupportedCommand(char),

    #[error("cannot move from {0}: coordinate out of range")]
    PositionOverflow(GridPos),
}

pub type RobotResult<T> = Result<T, RobotError>;
