use mars_core::RobotId;
use mars_robot::RobotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("robot at index {index} has id {got}, expected {expected}")]
    RobotIdMismatch {
        index:    usize,
        expected: RobotId,
        got:      RobotId,
    },

    #[error("{robot} failed at instruction {step}: {source}")]
    Execution {
        robot:  RobotId,
        step:   usize,
        #[source]
        source: RobotError,
    },
}

pub type SimResult<T> = Result<T, SimError>;
